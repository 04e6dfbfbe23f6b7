//! Interactive session: one in-memory container, driven by line commands.
//! Every action runs to completion and reports through a printed
//! notification; errors never end the session.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use cardbox_core::error::Result;
use cardbox_core::{Cardbox, load, save};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCmd {
    Create { name: String },
    Insert { id: i64, content: String },
    Edit { id: i64, content: String },
    Delete { id: i64 },
    Show,
    Status,
    Save,
    Load { path: PathBuf },
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  create <name>          start an empty container with this name
  insert <id> <content>  add a record (fails on duplicate ID)
  edit <id> <content>    replace a record's content
  delete <id>            remove a record
  show                   print all records
  status                 print container name and record count
  save                   write <name>.json in the current directory
  load <path>            replace the container from a document
  quit                   leave the session";

pub fn run(cardbox: &mut Cardbox) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();

    println!("cardbox shell — 'help' lists commands");
    loop {
        write!(out, "cardbox> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(cmd)) => {
                if !dispatch(cardbox, cmd) {
                    break;
                }
            }
            Err(usage) => println!("{usage}"),
        }
    }
    Ok(())
}

/// Split a line into a command. `Ok(None)` for blank input; `Err` carries
/// the usage message to print.
pub fn parse_line(line: &str) -> std::result::Result<Option<ShellCmd>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    let parsed = match cmd {
        "create" => {
            if rest.is_empty() {
                return Err("usage: create <name>".to_string());
            }
            ShellCmd::Create {
                name: rest.to_string(),
            }
        }
        "insert" | "edit" => {
            let (id_str, content) = rest
                .split_once(char::is_whitespace)
                .map(|(i, c)| (i, c.trim()))
                .ok_or_else(|| format!("usage: {cmd} <id> <content>"))?;
            if content.is_empty() {
                return Err(format!("usage: {cmd} <id> <content>"));
            }
            let id = parse_id(id_str)?;
            if cmd == "insert" {
                ShellCmd::Insert {
                    id,
                    content: content.to_string(),
                }
            } else {
                ShellCmd::Edit {
                    id,
                    content: content.to_string(),
                }
            }
        }
        "delete" => ShellCmd::Delete {
            id: parse_id(rest)?,
        },
        "show" | "list" => ShellCmd::Show,
        "status" => ShellCmd::Status,
        "save" => ShellCmd::Save,
        "load" => {
            if rest.is_empty() {
                return Err("usage: load <path>".to_string());
            }
            ShellCmd::Load {
                path: PathBuf::from(rest),
            }
        }
        "help" => ShellCmd::Help,
        "quit" | "exit" => ShellCmd::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(parsed))
}

fn parse_id(raw: &str) -> std::result::Result<i64, String> {
    raw.parse::<i64>()
        .map_err(|_| format!("'{raw}' is not an integer ID"))
}

/// Apply one command; returns false when the session should end.
pub fn dispatch(cardbox: &mut Cardbox, cmd: ShellCmd) -> bool {
    match cmd {
        ShellCmd::Create { name } => {
            cardbox.create(&name);
            println!("File '{name}' created.");
        }
        ShellCmd::Insert { id, content } => match cardbox.insert(id, &content) {
            Ok(()) => println!("Inserted record ID: {id}"),
            Err(e) => println!("error: {e}"),
        },
        ShellCmd::Edit { id, content } => match cardbox.edit(id, &content) {
            Ok(()) => println!("Updated record ID: {id}"),
            Err(e) => println!("error: {e}"),
        },
        ShellCmd::Delete { id } => match cardbox.delete(id) {
            Ok(()) => println!("Deleted record ID: {id}"),
            Err(e) => println!("error: {e}"),
        },
        ShellCmd::Show => {
            if cardbox.is_empty() {
                println!("No records to display.");
            } else {
                println!("File: {}", cardbox.file_name());
                for r in cardbox.rows() {
                    println!("ID: {}, Content: {}", r.id, r.content);
                }
            }
        }
        ShellCmd::Status => {
            if cardbox.is_empty() {
                println!("Disk is empty.");
            } else {
                let status = cardbox.status();
                println!("File: {}", status.file_name);
                println!("Total Records: {}", status.total_records);
            }
        }
        ShellCmd::Save => match save(cardbox, Path::new(".")) {
            Ok(path) => println!("Records saved to {}", path.display()),
            Err(e) => println!("error: {e}"),
        },
        ShellCmd::Load { path } => match load(&path) {
            Ok(next) => {
                *cardbox = next;
                println!("Records loaded from {}", path.display());
            }
            Err(e) => println!("error: {e}"),
        },
        ShellCmd::Help => println!("{HELP}"),
        ShellCmd::Quit => return false,
    }
    true
}
