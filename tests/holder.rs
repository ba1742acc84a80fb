//! End-to-end tests of the node holder over a real JSON document

use node_holder::holder::{JsonFileStore, NodeHolder, Record, RecordStore, ReportLevel};
use node_holder::nodes::shader::builtin_registry;
use node_holder::nodes::{NodeGraph, NodeId, PropertyValue};
use node_holder::{capture, EditorSpace, GraphSnapshot, OperatorStatus};
use std::fs;
use tempfile::TempDir;

fn math(graph: &mut NodeGraph, operation: &str) -> NodeId {
    let id = graph.new_node(builtin_registry(), "ShaderNodeMath").unwrap();
    let node = graph.node_mut(id).unwrap();
    node.set_property("operation", operation.into()).unwrap();
    node.select = true;
    id
}

fn add_multiply_space() -> EditorSpace {
    let mut graph = NodeGraph::new();
    let add = math(&mut graph, "ADD");
    let multiply = math(&mut graph, "MULTIPLY");
    graph.node_mut(multiply).unwrap().location = glam::Vec2::new(200.0, 0.0);
    graph.add_connection_by_ids(add, 0, multiply, 0).unwrap();
    EditorSpace::new(graph)
}

#[test]
fn test_saved_record_rebuilds_into_fresh_tree() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("global_list_data.json");

    let source = add_multiply_space();
    let tree = source.active_tree().unwrap();
    let snapshot = capture(tree, &tree.selected_nodes());
    let mut store = JsonFileStore::new(&path);
    store
        .write_all(&[Record {
            uid: "abc".to_string(),
            name: "MyAdd".to_string(),
            node_data: snapshot.encode().unwrap(),
        }])
        .unwrap();

    let mut holder = NodeHolder::new(JsonFileStore::new(&path));
    assert_eq!(holder.reload(), OperatorStatus::Finished);
    assert_eq!(holder.catalog().len(), 1);
    assert_eq!(holder.catalog().active().unwrap().uid, "abc");
    assert_eq!(holder.catalog().active().unwrap().name, "MyAdd");

    let mut target = EditorSpace::new(NodeGraph::new());
    assert_eq!(holder.load_active(&mut target), OperatorStatus::Finished);

    let graph = target.active_tree().unwrap();
    assert_eq!(graph.len(), 2);
    let operations: Vec<&PropertyValue> = graph
        .nodes()
        .map(|n| n.property("operation").unwrap())
        .collect();
    assert_eq!(
        operations,
        vec![&PropertyValue::from("ADD"), &PropertyValue::from("MULTIPLY")]
    );

    assert_eq!(graph.connections.len(), 1);
    let link = &graph.connections[0];
    let from = graph.node(link.from_node).unwrap();
    let to = graph.node(link.to_node).unwrap();
    assert_eq!(from.property("operation"), Some(&PropertyValue::from("ADD")));
    assert_eq!(to.property("operation"), Some(&PropertyValue::from("MULTIPLY")));
    assert_eq!((link.from_port, link.to_port), (0, 0));
    assert!(graph.nodes().all(|n| n.select));
}

#[test]
fn test_register_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store").join("list.json");

    let mut holder = NodeHolder::new(JsonFileStore::new(&path));
    assert_eq!(
        holder.register_selection(&add_multiply_space()),
        OperatorStatus::Finished
    );
    holder.shutdown().unwrap();

    let mut holder = NodeHolder::new(JsonFileStore::new(&path));
    assert_eq!(holder.catalog().len(), 1);
    assert_eq!(holder.catalog().get(0).unwrap().name, "Nodes");

    let mut target = EditorSpace::new(NodeGraph::new());
    assert_eq!(holder.load_active(&mut target), OperatorStatus::Finished);
    assert_eq!(target.active_tree().unwrap().len(), 2);
    assert_eq!(target.active_tree().unwrap().connections.len(), 1);
}

#[test]
fn test_rename_during_reload_does_not_recurse() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.json");
    let mut store = JsonFileStore::new(&path);
    store
        .write_all(&[
            Record::new("First", "{}"),
            Record::new("Second", "{}"),
        ])
        .unwrap();
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    let mut holder = NodeHolder::new(JsonFileStore::new(&path));
    // Loading assigns every name through the rename hook.
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
    assert!(!holder.updates().is_suppressed());

    assert!(holder.set_record_name(1, "Renamed"));
    assert!(!holder.updates().is_suppressed());
    assert_eq!(holder.catalog().get(1).unwrap().name, "Renamed");

    let stored = JsonFileStore::new(&path).read_all();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].name, "First");
    assert_eq!(stored[1].name, "Renamed");
}

#[test]
fn test_overwrite_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.json");
    let space = add_multiply_space();

    let mut holder = NodeHolder::new(JsonFileStore::new(&path));
    holder.register_selection(&EditorSpace::new(NodeGraph::new()));
    assert!(holder.catalog().is_empty());
    holder.register_selection(&space);

    assert_eq!(holder.overwrite_active(&space), OperatorStatus::Finished);
    let first = holder.catalog().active().unwrap().node_data.clone();
    let first_file = fs::read(&path).unwrap();

    assert_eq!(holder.overwrite_active(&space), OperatorStatus::Finished);
    let second = holder.catalog().active().unwrap().node_data.clone();

    assert_eq!(first, second);
    assert_eq!(first_file, fs::read(&path).unwrap());
}

#[test]
fn test_overwrite_targets_cursor_record_across_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.json");
    JsonFileStore::new(&path)
        .write_all(&[
            Record::new("a", "{}"),
            Record::new("b", "{}"),
            Record::new("c", "{}"),
        ])
        .unwrap();
    let space = add_multiply_space();

    let mut holder = NodeHolder::new(JsonFileStore::new(&path));
    holder.set_active_index(2);
    assert_eq!(holder.overwrite_active(&space), OperatorStatus::Finished);
    let first_file = fs::read(&path).unwrap();
    assert_eq!(holder.overwrite_active(&space), OperatorStatus::Finished);
    assert_eq!(first_file, fs::read(&path).unwrap());

    let stored = JsonFileStore::new(&path).read_all();
    let node_counts: Vec<usize> = stored
        .iter()
        .map(|r| GraphSnapshot::decode(&r.node_data).unwrap().nodes.len())
        .collect();
    assert_eq!(node_counts, vec![0, 0, 2]);

    assert!(holder.set_record_name(1, "Renamed"));
    assert_eq!(holder.catalog().active_index(), 2);
    assert_eq!(holder.reload(), OperatorStatus::Finished);
    assert_eq!(holder.catalog().active_index(), 2);
    assert_eq!(holder.catalog().active().unwrap().name, "c");
}

#[test]
fn test_malformed_document_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.json");
    fs::write(&path, "this is not json").unwrap();

    let mut holder = NodeHolder::new(JsonFileStore::new(&path));
    assert!(holder.catalog().is_empty());

    // Reload normalizes the broken document into an empty list.
    assert_eq!(holder.reload(), OperatorStatus::Finished);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_unknown_node_type_is_skipped_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.json");

    let mut graph = NodeGraph::new();
    let ids: Vec<NodeId> = ["ADD", "SUBTRACT", "MULTIPLY", "DIVIDE"]
        .iter()
        .map(|op| math(&mut graph, op))
        .collect();
    let mut snapshot = capture(&graph, &ids);
    snapshot.nodes[2].type_id = "ShaderNodeDoesNotExist".to_string();

    JsonFileStore::new(&path)
        .write_all(&[Record::new("Partial", snapshot.encode().unwrap())])
        .unwrap();

    let mut holder = NodeHolder::new(JsonFileStore::new(&path));
    let mut target = EditorSpace::new(NodeGraph::new());
    assert_eq!(holder.load_active(&mut target), OperatorStatus::Finished);
    assert_eq!(target.active_tree().unwrap().len(), 3);

    let reports = holder.drain_reports();
    assert!(reports.iter().any(|r| r.level == ReportLevel::Warning));
}

#[test]
fn test_legacy_payload_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.json");
    let legacy = r#"{"node": [{"name": "Math", "id": "ShaderNodeMath", "location": [10.0, 20.0], "width": 140.0, "inputs": [{"index": 1, "value": 2.5}], "properties": {"operation": "POWER", "use_clamp": true}}], "links": []}"#;
    fs::write(
        &path,
        serde_json::to_string(&serde_json::json!([
            {"uid": "legacy", "name": "Old", "node_data": legacy}
        ]))
        .unwrap(),
    )
    .unwrap();

    let mut holder = NodeHolder::new(JsonFileStore::new(&path));
    let mut target = EditorSpace::new(NodeGraph::new());
    assert_eq!(holder.load_active(&mut target), OperatorStatus::Finished);

    let graph = target.active_tree().unwrap();
    let node = graph.nodes().next().unwrap();
    assert_eq!(node.property("operation"), Some(&PropertyValue::from("POWER")));
    assert_eq!(node.property("use_clamp"), Some(&PropertyValue::Bool(true)));
    assert_eq!(node.location, glam::Vec2::new(10.0, 20.0));
    assert!(GraphSnapshot::decode(legacy).unwrap().links.is_empty());
}
