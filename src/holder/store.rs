//! Record store - the catalog's durable JSON document
//!
//! The document is a single array of `{uid, name, node_data}` objects,
//! pretty printed with four-space indentation. Writes go to a sibling temp
//! file which is then renamed over the document.

use super::record::Record;
use crate::config::HolderConfig;
use crate::constants::store::INDENT;
use crate::error::StoreResult;
use log::{debug, error, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable storage for the full record list
pub trait RecordStore {
    /// All stored records in document order.
    ///
    /// A missing or unreadable document yields an empty list; the failure
    /// is logged, never returned.
    fn read_all(&self) -> Vec<Record>;

    /// Replace the stored document with `records`
    fn write_all(&mut self, records: &[Record]) -> StoreResult<()>;
}

/// Encode records the way the document is laid out on disk
pub fn encode_document(records: &[Record]) -> StoreResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

/// JSON document on the local filesystem
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &HolderConfig) -> Self {
        Self::new(config.data_file.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, distinguishing a missing file (`None`) from a
    /// broken one (`Err`)
    pub fn load(&self) -> StoreResult<Option<Vec<Record>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        Ok(Some(records))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for JsonFileStore {
    fn read_all(&self) -> Vec<Record> {
        match self.load() {
            Ok(Some(records)) => {
                debug!("Read {} records from {}", records.len(), self.path.display());
                records
            }
            Ok(None) => {
                info!("No record store at {}, starting empty", self.path.display());
                Vec::new()
            }
            Err(e) => {
                error!("Failed to read record store {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn write_all(&mut self, records: &[Record]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let document = encode_document(records)?;
        let temp = self.temp_path();
        fs::write(&temp, document)?;
        fs::rename(&temp, &self.path)?;

        debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store, used by tests and embedders without a filesystem
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records, writes: 0 }
    }

    /// Number of completed `write_all` calls
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn read_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn write_all(&mut self, records: &[Record]) -> StoreResult<()> {
        self.records = records.to_vec();
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(uid: &str, name: &str) -> Record {
        Record {
            uid: uid.to_string(),
            name: name.to_string(),
            node_data: "{\"node\":[],\"links\":[]}".to_string(),
        }
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_none());
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_malformed_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{\"uid\": ").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(store.load().is_err());
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_write_creates_parent_dirs_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("list.json");
        let mut store = JsonFileStore::new(&path);
        let records = vec![record("a", "First"), record("b", "Second")];
        store.write_all(&records).unwrap();

        assert!(path.exists());
        assert!(!store.temp_path().exists());
        assert_eq!(store.read_all(), records);
    }

    #[test]
    fn test_document_layout() {
        let document = String::from_utf8(encode_document(&[record("a", "First")]).unwrap()).unwrap();
        let expected = "[\n    {\n        \"uid\": \"a\",\n        \"name\": \"First\",\n        \"node_data\": \"{\\\"node\\\":[],\\\"links\\\":[]}\"\n    }\n]";
        assert_eq!(document, expected);
        assert_eq!(encode_document(&[]).unwrap(), b"[]");
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::with_records(vec![record("a", "First")]);
        assert_eq!(store.read_all().len(), 1);
        store.write_all(&[]).unwrap();
        assert_eq!(store.writes(), 1);
        assert!(store.read_all().is_empty());
    }
}
