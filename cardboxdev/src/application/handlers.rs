use std::path::{Path, PathBuf};

use cardbox_core::error::Result;
use cardbox_core::{Cardbox, load, save};

/// Write a loaded container back next to the document it came from. The
/// file name was derived from the document's stem on load, so the same
/// path comes out.
fn save_back(cardbox: &Cardbox, document: &Path) -> Result<PathBuf> {
    let dir = document.parent().unwrap_or_else(|| Path::new("."));
    save(cardbox, dir)
}

pub fn handle_new(name: String, dir: PathBuf) -> Result<()> {
    let mut cardbox = Cardbox::new();
    cardbox.create(&name);
    let path = save(&cardbox, &dir)?;
    eprintln!("new: created {} (file \"{}\")", path.display(), name);
    Ok(())
}

pub fn handle_insert(document: PathBuf, id: i64, content: String) -> Result<()> {
    let mut cardbox = load(&document)?;
    cardbox.insert(id, &content)?;
    save_back(&cardbox, &document)?;
    eprintln!("insert: id={} -> {}", id, document.display());
    Ok(())
}

pub fn handle_edit(document: PathBuf, id: i64, content: String) -> Result<()> {
    let mut cardbox = load(&document)?;
    cardbox.edit(id, &content)?;
    save_back(&cardbox, &document)?;
    eprintln!("edit: id={} -> {}", id, document.display());
    Ok(())
}

pub fn handle_delete(document: PathBuf, id: i64) -> Result<()> {
    let mut cardbox = load(&document)?;
    cardbox.delete(id)?;
    save_back(&cardbox, &document)?;
    eprintln!("delete: id={} -> {}", id, document.display());
    Ok(())
}

pub fn handle_list(document: PathBuf) -> Result<()> {
    let cardbox = load(&document)?;
    if cardbox.is_empty() {
        eprintln!("list: no records in \"{}\"", cardbox.file_name());
        return Ok(());
    }
    println!("File: {}", cardbox.file_name());
    for r in cardbox.rows() {
        println!("{:>8}  {}", r.id, r.content);
    }
    Ok(())
}

pub fn handle_status(document: PathBuf) -> Result<()> {
    let cardbox = load(&document)?;
    let status = cardbox.status();
    if status.total_records == 0 {
        println!("{}: empty", status.file_name);
    } else {
        println!("{}: {} records", status.file_name, status.total_records);
    }
    Ok(())
}

pub fn handle_shell(load_from: Option<PathBuf>) -> Result<()> {
    let mut cardbox = match load_from {
        Some(path) => load(&path)?,
        None => Cardbox::new(),
    };
    crate::presentation::shell::run(&mut cardbox)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_writes_empty_document() {
        let dir = tempdir().unwrap();

        handle_new("inventory".to_string(), dir.path().to_path_buf())
            .expect("Failed to create document");

        let path = dir.path().join("inventory.json");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_insert_then_delete_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        handle_new("inventory".to_string(), dir.path().to_path_buf())
            .expect("Failed to create document");
        let doc = dir.path().join("inventory.json");

        handle_insert(doc.clone(), 1, "bolt".to_string()).expect("Failed to insert");
        handle_insert(doc.clone(), 2, "nut".to_string()).expect("Failed to insert");
        handle_delete(doc.clone(), 1).expect("Failed to delete");

        assert_eq!(std::fs::read_to_string(&doc).unwrap(), r#"{"2":"nut"}"#);
    }

    #[test]
    fn test_insert_duplicate_leaves_document_alone() {
        let dir = tempdir().unwrap();
        handle_new("inventory".to_string(), dir.path().to_path_buf())
            .expect("Failed to create document");
        let doc = dir.path().join("inventory.json");

        handle_insert(doc.clone(), 1, "bolt".to_string()).expect("Failed to insert");
        let result = handle_insert(doc.clone(), 1, "washer".to_string());

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&doc).unwrap(), r#"{"1":"bolt"}"#);
    }

    #[test]
    fn test_edit_missing_record_errors() {
        let dir = tempdir().unwrap();
        handle_new("inventory".to_string(), dir.path().to_path_buf())
            .expect("Failed to create document");
        let doc = dir.path().join("inventory.json");

        let result = handle_edit(doc, 9, "anything".to_string());
        assert!(result.is_err());
    }
}
