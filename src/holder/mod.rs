//! The node holder: a persisted catalog of captured subgraphs
//!
//! [`NodeHolder`] owns the in-memory [`Catalog`], keeps it in step with a
//! [`RecordStore`] and exposes the user actions in [`operators`].

pub mod operators;
pub mod record;
pub mod reports;
pub mod store;
pub mod suppress;

pub use operators::OperatorStatus;
pub use record::{Catalog, Record};
pub use reports::{Report, ReportLevel, Reports};
pub use store::{encode_document, JsonFileStore, MemoryStore, RecordStore};
pub use suppress::{SuppressGuard, UpdateSuppressor};

use crate::error::StoreResult;
use crate::nodes::NodeRegistry;
use crate::snapshot::GraphSnapshot;
use log::{debug, error, warn};

/// Catalog plus the store it is persisted to
pub struct NodeHolder<S: RecordStore> {
    store: S,
    catalog: Catalog,
    registry: NodeRegistry,
    updates: UpdateSuppressor,
    reports: Reports,
}

impl<S: RecordStore> NodeHolder<S> {
    /// Set up a holder over `store` with the built-in shader node types and
    /// load the catalog from it
    pub fn new(store: S) -> Self {
        Self::with_registry(store, NodeRegistry::shader())
    }

    pub fn with_registry(store: S, registry: NodeRegistry) -> Self {
        let mut holder = Self {
            store,
            catalog: Catalog::new(),
            registry,
            updates: UpdateSuppressor::new(),
            reports: Reports::default(),
        };
        holder.load_from_store();
        holder
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn updates(&self) -> &UpdateSuppressor {
        &self.updates
    }

    pub fn reports(&self) -> &Reports {
        &self.reports
    }

    /// Take the reports queued since the last drain
    pub fn drain_reports(&mut self) -> Vec<Report> {
        self.reports.drain()
    }

    pub fn set_active_index(&mut self, index: usize) {
        self.catalog.set_active_index(index);
    }

    /// Replace the catalog with the stored records.
    ///
    /// Names are assigned through [`Self::set_record_name`] like any other
    /// rename, so the whole reload runs with updates suppressed. The cursor
    /// keeps its index, clamped into the reloaded list.
    pub fn load_from_store(&mut self) {
        let _guard = self.updates.suppress();
        let stored = self.store.read_all();
        let cursor = self.catalog.active_index();

        self.catalog.clear();
        for record in stored {
            let name = record.name.clone();
            self.catalog.push(record);
            let index = self.catalog.len() - 1;
            self.set_record_name(index, name);
        }
        self.catalog.set_active_index(cursor);
        debug!("Catalog loaded with {} records", self.catalog.len());
    }

    /// Write the whole catalog to the store
    pub fn store_to_disk(&mut self) -> StoreResult<()> {
        self.store.write_all(self.catalog.records())
    }

    /// Rename the record at `index` and run the rename hook
    pub fn set_record_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.catalog.get_mut(index) {
            Some(record) => record.name = name.into(),
            None => return false,
        }
        self.name_changed(index);
        true
    }

    /// Rename hook: push the record's new name to the store
    fn name_changed(&mut self, index: usize) {
        if self.updates.is_suppressed() {
            return;
        }
        let Some(record) = self.catalog.get(index) else {
            return;
        };
        let uid = record.uid.clone();
        let name = record.name.clone();
        if let Err(e) = self.update_record(&uid, Some(&name), None) {
            error!("Failed to store new name for record {}: {}", uid, e);
        }
    }

    /// Point-update one stored record and reload the catalog from the
    /// result.
    ///
    /// Empty names and missing payloads leave the stored fields alone.
    /// Returns `Ok(false)` when no stored record has `uid` or while updates
    /// are suppressed.
    pub fn update_record(
        &mut self,
        uid: &str,
        new_name: Option<&str>,
        new_data: Option<&GraphSnapshot>,
    ) -> StoreResult<bool> {
        if self.updates.is_suppressed() {
            debug!("Update of record {} suppressed", uid);
            return Ok(false);
        }

        let node_data = new_data.map(GraphSnapshot::encode).transpose()?;

        let mut stored = self.store.read_all();
        let Some(record) = stored.iter_mut().find(|r| r.uid == uid) else {
            warn!("No stored record with uid {}, nothing updated", uid);
            return Ok(false);
        };

        if let Some(name) = new_name.filter(|n| !n.is_empty()) {
            record.name = name.to_string();
        }
        if let Some(data) = node_data {
            record.node_data = data;
        }

        self.store.write_all(&stored)?;
        self.load_from_store();
        Ok(true)
    }

    /// Flush the catalog to the store and hand the store back
    pub fn shutdown(mut self) -> StoreResult<S> {
        self.store_to_disk()?;
        debug!("Node holder shut down with {} records", self.catalog.len());
        Ok(self.store)
    }
}
