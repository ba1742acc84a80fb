//! Saved records and the in-memory catalog

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, persisted snapshot of a node subgraph.
///
/// `node_data` is the encoded snapshot; the catalog and the store never
/// look inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub uid: String,
    pub name: String,
    pub node_data: String,
}

impl Record {
    /// New record with a fresh v4 uid
    pub fn new(name: impl Into<String>, node_data: impl Into<String>) -> Self {
        Self {
            uid: Uuid::new_v4().to_string(),
            name: name.into(),
            node_data: node_data.into(),
        }
    }
}

/// Ordered records plus the list cursor
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
    active_index: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record with a fresh uid
    pub fn add(&mut self, name: impl Into<String>, node_data: impl Into<String>) -> &Record {
        self.push(Record::new(name, node_data))
    }

    /// Append an existing record, keeping its uid
    pub fn push(&mut self, record: Record) -> &Record {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Remove the record at `index`. The cursor steps back by one when it
    /// was past the start and always ends up inside the list.
    pub fn remove(&mut self, index: usize) -> Option<Record> {
        if index >= self.records.len() {
            return None;
        }
        let removed = self.records.remove(index);
        if index > 0 {
            self.active_index = index - 1;
        }
        self.clamp_cursor();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.clamp_cursor();
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    /// Index of the record with this uid
    pub fn position(&self, uid: &str) -> Option<usize> {
        self.records.iter().position(|r| r.uid == uid)
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

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Move the cursor (clamped into the list)
    pub fn set_active_index(&mut self, index: usize) {
        self.active_index = index;
        self.clamp_cursor();
    }

    /// Record under the cursor
    pub fn active(&self) -> Option<&Record> {
        self.records.get(self.active_index)
    }

    fn clamp_cursor(&mut self) {
        self.active_index = self.active_index.min(self.records.len().saturating_sub(1));
    }
}
