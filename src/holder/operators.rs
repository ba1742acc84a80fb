//! User actions on the node holder
//!
//! Each action is one synchronous call. The return value only says whether
//! the action ran; what happened is queued as a [`Report`](super::Report).

use super::{NodeHolder, RecordStore};
use crate::constants::catalog::NEW_RECORD_NAME;
use crate::context::EditorSpace;
use crate::snapshot::{apply, capture_selection, Applied, GraphSnapshot};
use log::debug;

/// Outcome of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    Finished,
    Cancelled,
}

impl<S: RecordStore> NodeHolder<S> {
    /// Capture the selection of the active tree into a new record.
    ///
    /// The catalog is reloaded first so records written elsewhere since the
    /// last load survive the write.
    pub fn register_selection(&mut self, space: &EditorSpace) -> OperatorStatus {
        let Some(snapshot) = capture_selection(space) else {
            debug!("Nothing selected, no record created");
            return OperatorStatus::Finished;
        };
        let node_data = match snapshot.encode() {
            Ok(data) => data,
            Err(e) => {
                self.reports.error(format!("Failed to encode nodes: {}", e));
                return OperatorStatus::Cancelled;
            }
        };

        self.load_from_store();
        self.catalog.add(NEW_RECORD_NAME, node_data);
        if let Err(e) = self.store_to_disk() {
            self.reports.error(format!("Failed to save node list: {}", e));
            return OperatorStatus::Cancelled;
        }

        self.reports.info(format!(
            "Saved {} nodes and {} links",
            snapshot.nodes.len(),
            snapshot.links.len()
        ));
        OperatorStatus::Finished
    }

    /// Replace the payload of the record under the cursor with the current
    /// selection. Without a selection nothing happens.
    pub fn overwrite_active(&mut self, space: &EditorSpace) -> OperatorStatus {
        let Some(snapshot) = capture_selection(space) else {
            debug!("Nothing selected, record left as is");
            return OperatorStatus::Finished;
        };
        let Some(record) = self.catalog.active() else {
            self.reports.warning("No record selected");
            return OperatorStatus::Cancelled;
        };
        let uid = record.uid.clone();

        match self.update_record(&uid, None, Some(&snapshot)) {
            Ok(true) => {
                self.reports
                    .info(format!("Overwrote record with {} nodes", snapshot.nodes.len()));
                OperatorStatus::Finished
            }
            Ok(false) => {
                self.reports.warning("Record is not in the saved list");
                OperatorStatus::Cancelled
            }
            Err(e) => {
                self.reports.error(format!("Failed to overwrite record: {}", e));
                OperatorStatus::Cancelled
            }
        }
    }

    /// Remove the record under the cursor and save the catalog
    pub fn remove_active(&mut self) -> OperatorStatus {
        let index = self.catalog.active_index();
        if let Some(record) = self.catalog.remove(index) {
            debug!("Removed record {} ({})", record.name, record.uid);
        }
        if let Err(e) = self.store_to_disk() {
            self.reports.error(format!("Failed to save node list: {}", e));
            return OperatorStatus::Cancelled;
        }
        OperatorStatus::Finished
    }

    /// Decode the record under the cursor and build it into the active tree.
    ///
    /// The payload is decoded before the tree is touched, so a bad record
    /// leaves the tree unchanged.
    pub fn load_active(&mut self, space: &mut EditorSpace) -> OperatorStatus {
        let Some(record) = self.catalog.active() else {
            self.reports.warning("No record selected");
            return OperatorStatus::Cancelled;
        };
        let snapshot = match GraphSnapshot::decode(&record.node_data) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.reports.error(format!("Failed to load node data: {}", e));
                return OperatorStatus::Cancelled;
            }
        };

        let Some(tree) = space.active_tree_mut() else {
            self.reports.error("No active node tree");
            return OperatorStatus::Cancelled;
        };

        let applied = apply(&snapshot, tree, &self.registry);
        self.report_applied(&applied);
        OperatorStatus::Finished
    }

    /// Reload the catalog from the store and write it back
    pub fn reload(&mut self) -> OperatorStatus {
        self.load_from_store();
        if let Err(e) = self.store_to_disk() {
            self.reports.error(format!("Failed to save node list: {}", e));
            return OperatorStatus::Cancelled;
        }
        OperatorStatus::Finished
    }

    fn report_applied(&mut self, applied: &Applied) {
        self.reports.info(format!(
            "Loaded {} nodes and {} links",
            applied.nodes.len(),
            applied.links
        ));
        if !applied.issues.is_empty() {
            self.reports.warning(format!(
                "{} items could not be restored",
                applied.issues.len()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holder::{MemoryStore, Record, ReportLevel};
    use crate::nodes::shader::builtin_registry;
    use crate::nodes::NodeGraph;

    fn space_with_selection() -> EditorSpace {
        let mut graph = NodeGraph::new();
        let a = graph.new_node(builtin_registry(), "ShaderNodeMath").unwrap();
        let b = graph.new_node(builtin_registry(), "ShaderNodeMath").unwrap();
        graph.add_connection_by_ids(a, 0, b, 0).unwrap();
        for id in [a, b] {
            graph.node_mut(id).unwrap().select = true;
        }
        EditorSpace::new(graph)
    }

    fn record(uid: &str, node_data: &str) -> Record {
        Record {
            uid: uid.to_string(),
            name: "Nodes".to_string(),
            node_data: node_data.to_string(),
        }
    }

    #[test]
    fn test_register_without_selection_is_noop() {
        let mut holder = NodeHolder::new(MemoryStore::new());
        let space = EditorSpace::new(NodeGraph::new());
        assert_eq!(holder.register_selection(&space), OperatorStatus::Finished);
        assert!(holder.catalog().is_empty());
        assert_eq!(holder.store().writes(), 0);
    }

    #[test]
    fn test_register_appends_and_saves() {
        let mut holder = NodeHolder::new(MemoryStore::with_records(vec![record("old", "{}")]));
        assert_eq!(
            holder.register_selection(&space_with_selection()),
            OperatorStatus::Finished
        );
        assert_eq!(holder.catalog().len(), 2);
        let added = holder.catalog().get(1).unwrap();
        assert_eq!(added.name, NEW_RECORD_NAME);
        assert_eq!(GraphSnapshot::decode(&added.node_data).unwrap().nodes.len(), 2);
        assert_eq!(holder.store().records().len(), 2);
        assert_eq!(holder.store().writes(), 1);
    }

    #[test]
    fn test_remove_active_saves_and_moves_cursor() {
        let mut holder = NodeHolder::new(MemoryStore::with_records(vec![
            record("a", "{}"),
            record("b", "{}"),
        ]));
        holder.set_active_index(1);
        assert_eq!(holder.remove_active(), OperatorStatus::Finished);
        assert_eq!(holder.catalog().active_index(), 0);
        assert_eq!(holder.store().records().len(), 1);
        assert_eq!(holder.store().records()[0].uid, "a");
    }

    #[test]
    fn test_load_empty_payload_leaves_tree_untouched() {
        let mut holder = NodeHolder::new(MemoryStore::with_records(vec![record("a", "")]));
        let mut space = EditorSpace::new(NodeGraph::new());
        assert_eq!(holder.load_active(&mut space), OperatorStatus::Cancelled);
        assert!(space.active_tree().unwrap().is_empty());
        let reports = holder.drain_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].level, ReportLevel::Error);
    }

    #[test]
    fn test_load_invalid_payload_is_reported() {
        let mut holder = NodeHolder::new(MemoryStore::with_records(vec![record("a", "{not json")]));
        let mut space = EditorSpace::new(NodeGraph::new());
        assert_eq!(holder.load_active(&mut space), OperatorStatus::Cancelled);
        assert!(space.active_tree().unwrap().is_empty());
        assert!(holder.reports().pending()[0].message.starts_with("Failed to load node data"));
    }

    #[test]
    fn test_load_without_tree() {
        let mut holder = NodeHolder::new(MemoryStore::with_records(vec![record("a", "{}")]));
        let mut space = EditorSpace::default();
        assert_eq!(holder.load_active(&mut space), OperatorStatus::Cancelled);
    }

    #[test]
    fn test_overwrite_needs_record_and_selection() {
        let mut holder = NodeHolder::new(MemoryStore::new());
        assert_eq!(
            holder.overwrite_active(&space_with_selection()),
            OperatorStatus::Cancelled
        );

        let mut holder = NodeHolder::new(MemoryStore::with_records(vec![record("a", "{}")]));
        let empty = EditorSpace::new(NodeGraph::new());
        assert_eq!(holder.overwrite_active(&empty), OperatorStatus::Finished);
        assert_eq!(holder.store().writes(), 0);
        assert!(holder.reports().pending().is_empty());
        assert_eq!(holder.catalog().get(0).unwrap().node_data, "{}");
    }

    fn three_records() -> NodeHolder<MemoryStore> {
        NodeHolder::new(MemoryStore::with_records(vec![
            record("a", "{}"),
            record("b", "{}"),
            record("c", "{}"),
        ]))
    }

    fn node_count(holder: &NodeHolder<MemoryStore>, index: usize) -> usize {
        GraphSnapshot::decode(&holder.catalog().get(index).unwrap().node_data)
            .unwrap()
            .nodes
            .len()
    }

    #[test]
    fn test_repeated_overwrite_stays_on_cursor_record() {
        let mut holder = three_records();
        holder.set_active_index(2);
        let space = space_with_selection();

        assert_eq!(holder.overwrite_active(&space), OperatorStatus::Finished);
        assert_eq!(holder.catalog().active_index(), 2);
        let first = holder.catalog().get(2).unwrap().node_data.clone();

        assert_eq!(holder.overwrite_active(&space), OperatorStatus::Finished);
        assert_eq!(holder.catalog().active_index(), 2);
        assert_eq!(holder.catalog().get(2).unwrap().node_data, first);
        assert_eq!(node_count(&holder, 0), 0);
        assert_eq!(node_count(&holder, 1), 0);
        assert_eq!(node_count(&holder, 2), 2);
    }

    #[test]
    fn test_register_and_reload_keep_cursor() {
        let mut holder = three_records();
        holder.set_active_index(1);

        assert_eq!(
            holder.register_selection(&space_with_selection()),
            OperatorStatus::Finished
        );
        assert_eq!(holder.catalog().len(), 4);
        assert_eq!(holder.catalog().active_index(), 1);

        assert_eq!(holder.reload(), OperatorStatus::Finished);
        assert_eq!(holder.catalog().active_index(), 1);
        assert_eq!(holder.catalog().active().unwrap().uid, "b");
    }

    #[test]
    fn test_load_uses_cursor_record() {
        let mut holder = three_records();
        holder.set_active_index(1);
        holder.overwrite_active(&space_with_selection());

        let mut space = EditorSpace::new(NodeGraph::new());
        assert_eq!(holder.load_active(&mut space), OperatorStatus::Finished);
        assert_eq!(space.active_tree().unwrap().len(), 2);
    }

    #[test]
    fn test_overwrite_replaces_payload() {
        let mut holder = NodeHolder::new(MemoryStore::with_records(vec![record("a", "{}")]));
        assert_eq!(
            holder.overwrite_active(&space_with_selection()),
            OperatorStatus::Finished
        );
        let data = &holder.catalog().get(0).unwrap().node_data;
        let snapshot = GraphSnapshot::decode(data).unwrap();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.links.len(), 1);
        assert_eq!(holder.store().writes(), 1);
    }

    #[test]
    fn test_reload_writes_back() {
        let mut holder = NodeHolder::new(MemoryStore::with_records(vec![record("a", "{}")]));
        assert_eq!(holder.reload(), OperatorStatus::Finished);
        assert_eq!(holder.catalog().len(), 1);
        assert_eq!(holder.store().writes(), 1);
    }
}
