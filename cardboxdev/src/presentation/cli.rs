use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "cardboxdev CLI (alpha)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a container and save its (empty) document
    New {
        /// container name; the document lands at <name>.json
        name: String,
        /// directory to write the document into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Insert a record into a saved document
    Insert {
        document: PathBuf,
        id: i64,
        content: String,
    },

    /// Replace the content of an existing record
    Edit {
        document: PathBuf,
        id: i64,
        content: String,
    },

    /// Delete a record from a saved document
    Delete { document: PathBuf, id: i64 },

    /// Print all records in a saved document
    List { document: PathBuf },

    /// Print container name and record count
    Status { document: PathBuf },

    /// Interactive session over one in-memory container
    Shell {
        /// start from an existing document
        #[arg(long)]
        load: Option<PathBuf>,
    },
}
