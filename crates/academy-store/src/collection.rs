//! Durable collection primitive.
//!
//! A collection owns one named slot holding every record of one entity family,
//! in insertion order. Stores read the whole slot, mutate it, and write it back;
//! collections know nothing about identities or relationships.
//!
//! Two backends ship today:
//! - [`MemoryCollection`] keeps records in process memory (no serialization).
//! - [`JsonlCollection`] keeps `<dir>/<slot>.jsonl`, one record per line, so data
//!   survives process restarts.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Storage slot for one entity family.
pub trait Collection<T>: Send + Sync {
    /// Fixed slot name (e.g. `"sessions"`).
    fn slot(&self) -> &str;

    /// Read every record in insertion order.
    ///
    /// Returns `None` when the slot has never been written, which is what
    /// first-access seeding keys off.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend cannot be read.
    fn load(&self) -> Result<Option<Vec<T>>, StoreError>;

    /// Replace the slot contents with `records`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend cannot be written.
    fn store(&self, records: &[T]) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// MemoryCollection
// ---------------------------------------------------------------------------

/// Process-local collection.
pub struct MemoryCollection<T> {
    slot: String,
    records: Mutex<Option<Vec<T>>>,
}

impl<T> MemoryCollection<T> {
    #[must_use]
    pub fn new(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            records: Mutex::new(None),
        }
    }

    /// Create a collection whose slot is already initialized with `records`.
    #[must_use]
    pub fn with_records(slot: impl Into<String>, records: Vec<T>) -> Self {
        Self {
            slot: slot.into(),
            records: Mutex::new(Some(records)),
        }
    }
}

impl<T: Clone + Send> Collection<T> for MemoryCollection<T> {
    fn slot(&self) -> &str {
        &self.slot
    }

    fn load(&self) -> Result<Option<Vec<T>>, StoreError> {
        let guard = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn store(&self, records: &[T]) -> Result<(), StoreError> {
        let mut guard = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(records.to_vec());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JsonlCollection
// ---------------------------------------------------------------------------

/// File-backed collection: `<dir>/<slot>.jsonl`.
///
/// The whole file is rewritten on every store. A missing file means the slot
/// was never written; an empty file is an initialized, empty slot.
pub struct JsonlCollection<T> {
    slot: String,
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonlCollection<T> {
    #[must_use]
    pub fn new(dir: &Path, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let path = dir.join(format!("{slot}.jsonl"));
        Self {
            slot,
            path,
            _records: PhantomData,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Collection {
            slot: self.slot.clone(),
            source,
        }
    }
}

impl<T> Collection<T> for JsonlCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    fn slot(&self) -> &str {
        &self.slot
    }

    fn load(&self) -> Result<Option<Vec<T>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let records = serde_jsonlines::json_lines(&self.path)
            .map_err(|e| self.io_error(e))?
            .collect::<std::io::Result<Vec<T>>>()
            .map_err(|e| self.io_error(e))?;
        Ok(Some(records))
    }

    fn store(&self, records: &[T]) -> Result<(), StoreError> {
        serde_jsonlines::write_json_lines(&self.path, records).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Row {
        id: String,
        n: u32,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a".into(), n: 1 },
            Row { id: "b".into(), n: 2 },
        ]
    }

    #[test]
    fn memory_slot_starts_uninitialized() {
        let col: MemoryCollection<Row> = MemoryCollection::new("rows");
        assert_eq!(col.slot(), "rows");
        assert!(col.load().unwrap().is_none());
    }

    #[test]
    fn memory_store_then_load_keeps_order() {
        let col = MemoryCollection::new("rows");
        col.store(&rows()).unwrap();
        assert_eq!(col.load().unwrap(), Some(rows()));
    }

    #[test]
    fn memory_empty_store_is_initialized() {
        let col: MemoryCollection<Row> = MemoryCollection::new("rows");
        col.store(&[]).unwrap();
        assert_eq!(col.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn jsonl_missing_file_is_uninitialized() {
        let dir = TempDir::new().unwrap();
        let col: JsonlCollection<Row> = JsonlCollection::new(dir.path(), "rows");
        assert!(col.load().unwrap().is_none());
        assert!(col.path().ends_with("rows.jsonl"));
    }

    #[test]
    fn jsonl_survives_reopen() {
        let dir = TempDir::new().unwrap();
        JsonlCollection::new(dir.path(), "rows").store(&rows()).unwrap();

        let reopened: JsonlCollection<Row> = JsonlCollection::new(dir.path(), "rows");
        assert_eq!(reopened.load().unwrap(), Some(rows()));
    }

    #[test]
    fn jsonl_store_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let col = JsonlCollection::new(dir.path(), "rows");
        col.store(&rows()).unwrap();
        col.store(&rows()[..1]).unwrap();
        assert_eq!(col.load().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn jsonl_corrupt_line_reports_slot() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("rows.jsonl"), "{not json}\n").unwrap();
        let col: JsonlCollection<Row> = JsonlCollection::new(dir.path(), "rows");
        let err = col.load().unwrap_err();
        assert!(matches!(err, StoreError::Collection { ref slot, .. } if slot == "rows"));
    }
}
