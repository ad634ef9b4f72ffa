//! RecordStore — ordered collection of committed records.
//!
//! Insertion order is preserved; delete shifts later records left by one.
//! Single-writer: every mutation runs to completion before the next is
//! issued, so indices handed out by `append` stay consistent between calls.

use tracing::debug;

use crate::error::{FormsError, Result};
use crate::types::Record;

/// Ordered, index-addressed collection of committed records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end. Returns its index.
    pub fn append(&mut self, record: Record) -> usize {
        let index = self.records.len();
        debug!(index, form_type = %record.form_type, "record appended");
        self.records.push(record);
        index
    }

    /// Replace the record at `index` in place, preserving its position.
    pub fn update_at(&mut self, index: usize, record: Record) -> Result<()> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(FormsError::IndexOutOfRange { index, len })?;
        *slot = record;
        debug!(index, "record updated");
        Ok(())
    }

    /// Remove the record at `index`, shifting later records down by one.
    ///
    /// Any caller-held edit index at or beyond `index` is invalid after this
    /// and must be cleared by that caller.
    pub fn delete_at(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            return Err(FormsError::out_of_range(index, self.records.len()));
        }
        let record = self.records.remove(index);
        debug!(index, form_type = %record.form_type, "record deleted");
        Ok(record)
    }

    /// The record at `index`, for pre-populating an edit.
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or(FormsError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Read-only view of all records in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn record(form_type: &str, name: &str) -> Record {
        let mut values = IndexMap::new();
        values.insert("firstName".to_string(), name.to_string());
        Record::new(form_type, values)
    }

    #[test]
    fn append_returns_sequential_indices() {
        let mut store = RecordStore::new();
        assert_eq!(store.append(record("userInfo", "Ann")), 0);
        assert_eq!(store.append(record("userInfo", "Ben")), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_at_preserves_position() {
        let mut store = RecordStore::new();
        store.append(record("userInfo", "Ann"));
        store.append(record("userInfo", "Ben"));

        store.update_at(0, record("userInfo", "Amy")).unwrap();

        assert_eq!(store.get(0).unwrap().get("firstName"), Some("Amy"));
        assert_eq!(store.get(1).unwrap().get("firstName"), Some("Ben"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_out_of_range_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        store.append(record("userInfo", "Ann"));
        store.append(record("userInfo", "Ben"));

        let err = store.update_at(5, record("userInfo", "Eve")).unwrap_err();
        assert!(matches!(err, FormsError::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(store.get(0).unwrap().get("firstName"), Some("Ann"));
        assert_eq!(store.get(1).unwrap().get("firstName"), Some("Ben"));
    }

    #[test]
    fn delete_shifts_later_records_down() {
        let mut store = RecordStore::new();
        store.append(record("userInfo", "Ann"));
        store.append(record("userInfo", "Ben"));

        let removed = store.delete_at(0).unwrap();
        assert_eq!(removed.get("firstName"), Some("Ann"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().get("firstName"), Some("Ben"));
    }

    #[test]
    fn delete_out_of_range_errors() {
        let mut store = RecordStore::new();
        let err = store.delete_at(0).unwrap_err();
        assert!(matches!(err, FormsError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn all_is_insertion_ordered() {
        let mut store = RecordStore::new();
        store.append(record("userInfo", "Ann"));
        store.append(record("addressInfo", "Ben"));

        let forms: Vec<_> = store.all().iter().map(|r| r.form_type.as_str()).collect();
        assert_eq!(forms, ["userInfo", "addressInfo"]);
    }
}
