//! Canonical record list with CRUD mutators.

use std::collections::BTreeSet;

use roster_model::{Record, RecordId, RecordPatch};

/// Ordered list of user records.
///
/// Insertion order is preserved and is the order of an unsorted view. Ids
/// are not checked for uniqueness; updates and removals act on every record
/// carrying the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole list.
    pub fn set_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Append a record. The caller supplies the id.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Merge `patch` into the records with this id. Returns `false` when no
    /// record matched.
    pub fn update(&mut self, id: &str, patch: &RecordPatch) -> bool {
        let mut matched = false;
        for record in self.records.iter_mut().filter(|r| r.id.as_str() == id) {
            record.apply(patch);
            matched = true;
        }
        matched
    }

    /// Remove the records with this id. Returns `false` when none matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id.as_str() != id);
        self.records.len() != before
    }

    /// Remove every record whose id is in `ids`; returns how many went.
    pub fn remove_many(&mut self, ids: &BTreeSet<RecordId>) -> usize {
        let before = self.records.len();
        self.records.retain(|record| !ids.contains(record.id.as_str()));
        before - self.records.len()
    }
}
