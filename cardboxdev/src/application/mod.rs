pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use cardbox_core::error::Result;
use clap::Parser;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::New { name, dir } => handlers::handle_new(name, dir),
        Commands::Insert {
            document,
            id,
            content,
        } => handlers::handle_insert(document, id, content),
        Commands::Edit {
            document,
            id,
            content,
        } => handlers::handle_edit(document, id, content),
        Commands::Delete { document, id } => handlers::handle_delete(document, id),
        Commands::List { document } => handlers::handle_list(document),
        Commands::Status { document } => handlers::handle_status(document),
        Commands::Shell { load } => handlers::handle_shell(load),
    }
}
