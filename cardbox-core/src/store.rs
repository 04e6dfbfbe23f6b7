use std::collections::BTreeMap;

use crate::domain::{DiskStatus, RecordRow};
use crate::error::{CardboxError, Result};

/// One named container of records, keyed by integer ID.
///
/// The record count is always derived from the map, so it cannot drift
/// from the number of entries. `BTreeMap` keeps enumeration in ascending
/// ID order.
#[derive(Clone, Debug, Default)]
pub struct Cardbox {
    file_name: String,
    records: BTreeMap<i64, String>,
}

impl Cardbox {
    /// An unnamed, empty store. `save` refuses it until `create` or
    /// `load` has run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to an empty container with the given name.
    pub fn create(&mut self, name: &str) {
        self.file_name = name.to_string();
        self.records.clear();
    }

    pub fn insert(&mut self, id: i64, content: &str) -> Result<()> {
        if self.records.contains_key(&id) {
            return Err(CardboxError::DuplicateId(id));
        }
        self.records.insert(id, content.to_string());
        Ok(())
    }

    pub fn edit(&mut self, id: i64, content: &str) -> Result<()> {
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = content.to_string();
                Ok(())
            }
            None => Err(CardboxError::NotFound(id)),
        }
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        match self.records.remove(&id) {
            Some(_) => Ok(()),
            None => Err(CardboxError::NotFound(id)),
        }
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.records.get(&id).map(String::as_str)
    }

    /// All records in ascending ID order.
    pub fn rows(&self) -> Vec<RecordRow> {
        self.records
            .iter()
            .map(|(id, content)| RecordRow {
                id: *id,
                content: content.clone(),
            })
            .collect()
    }

    pub fn status(&self) -> DiskStatus {
        DiskStatus {
            file_name: self.file_name.clone(),
            total_records: self.records.len(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn records(&self) -> &BTreeMap<i64, String> {
        &self.records
    }

    pub(crate) fn from_parts(file_name: String, records: BTreeMap<i64, String>) -> Self {
        Self { file_name, records }
    }
}
