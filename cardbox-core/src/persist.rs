use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{CardboxError, Result};
use crate::store::Cardbox;

/// Extension of the on-disk document.
pub const DOC_EXT: &str = "json";

/// Write the container's document into `dir` as `<file_name>.json`.
///
/// The document is one JSON object: record IDs as keys (strings, per JSON
/// key rules), content strings as values. Returns the written path.
pub fn save(cardbox: &Cardbox, dir: &Path) -> Result<PathBuf> {
    if cardbox.file_name().is_empty() {
        return Err(CardboxError::NoFileName);
    }
    let path = dir.join(format!("{}.{}", cardbox.file_name(), DOC_EXT));
    let doc = serde_json::to_vec(cardbox.records())
        .map_err(|e| CardboxError::Format(format!("document encode: {e}")))?;
    fs::write(&path, doc)?;
    info!(path = %path.display(), records = cardbox.len(), "saved document");
    Ok(path)
}

/// Read a document and replace the store wholesale. The container name is
/// the path's base name with the extension stripped; IDs come back as
/// integers, so a non-integer key fails the whole load.
pub fn load(path: &Path) -> Result<Cardbox> {
    let raw = fs::read_to_string(path)?;
    let records: BTreeMap<i64, String> = serde_json::from_str(&raw)
        .map_err(|e| CardboxError::Format(format!("document decode: {e}")))?;
    let file_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CardboxError::Format(format!("no base name in {}", path.display())))?
        .to_string();
    info!(path = %path.display(), records = records.len(), "loaded document");
    Ok(Cardbox::from_parts(file_name, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();

        let mut cardbox = Cardbox::new();
        cardbox.create("inventory");
        cardbox.insert(1, "bolt").expect("Failed to insert");
        cardbox.insert(2, "nut").expect("Failed to insert");
        cardbox.delete(1).expect("Failed to delete");

        let path = save(&cardbox, dir.path()).expect("Failed to save");
        assert_eq!(path, dir.path().join("inventory.json"));

        let doc = fs::read_to_string(&path).unwrap();
        assert_eq!(doc, r#"{"2":"nut"}"#);

        let loaded = load(&path).expect("Failed to load");
        assert_eq!(loaded.file_name(), "inventory");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(2), Some("nut"));
    }

    #[test]
    fn test_save_without_name_fails() {
        let dir = tempdir().unwrap();
        let cardbox = Cardbox::new();

        let result = save(&cardbox, dir.path());
        assert!(matches!(result, Err(CardboxError::NoFileName)));
    }

    #[test]
    fn test_load_derives_name_from_stem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spare-parts.json");
        fs::write(&path, r#"{"10":"gasket"}"#).unwrap();

        let loaded = load(&path).expect("Failed to load");
        assert_eq!(loaded.file_name(), "spare-parts");
        assert_eq!(loaded.get(10), Some("gasket"));
    }

    #[test]
    fn test_load_malformed_document_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(CardboxError::Format(_))));
    }

    #[test]
    fn test_load_non_integer_key_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("odd.json");
        fs::write(&path, r#"{"first":"bolt"}"#).unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(CardboxError::Format(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CardboxError::Io(_))));
    }

    #[test]
    fn test_empty_container_saves_empty_object() {
        let dir = tempdir().unwrap();

        let mut cardbox = Cardbox::new();
        cardbox.create("blank");
        let path = save(&cardbox, dir.path()).expect("Failed to save");

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        let loaded = load(&path).expect("Failed to load");
        assert!(loaded.is_empty());
        assert_eq!(loaded.file_name(), "blank");
    }
}
