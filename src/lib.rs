//! Node holder library
//!
//! Capture selected shader nodes into named records, keep the records in a
//! JSON document, and rebuild them into any node tree later.

pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod holder;
pub mod nodes;
pub mod snapshot;

// Re-export commonly used types
pub use config::HolderConfig;
pub use context::EditorSpace;
pub use error::{GraphError, SnapshotError, StoreError};
pub use holder::{JsonFileStore, NodeHolder, OperatorStatus, Record, RecordStore};
pub use nodes::{NodeGraph, NodeRegistry};
pub use snapshot::{apply, capture, GraphSnapshot};
