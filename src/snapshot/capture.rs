//! Capture a node selection into a [`GraphSnapshot`]

use super::model::{
    CurveData, CurvePointData, GraphSnapshot, InputSnapshot, LinkSnapshot, NodeSnapshot,
    RampData, RampElementData, SpecialData,
};
use super::CAPTURED_PROPERTIES;
use crate::context::EditorSpace;
use crate::nodes::{ColorRamp, CurveMapping, Node, NodeGraph, NodeId};
use log::{debug, warn};
use std::collections::HashSet;

/// Snapshot the selected nodes of the editor's active tree.
///
/// Returns `None` when there is no tree or nothing is selected.
pub fn capture_selection(space: &EditorSpace) -> Option<GraphSnapshot> {
    let tree = space.active_tree()?;
    let selected = tree.selected_nodes();
    if selected.is_empty() {
        return None;
    }
    Some(capture(tree, &selected))
}

/// Snapshot `selected` nodes of `graph` together with the links between them.
///
/// Links with an endpoint outside the selection are left out so the
/// snapshot is self-contained. Output order follows `selected` for nodes
/// and the graph's link order for links.
pub fn capture(graph: &NodeGraph, selected: &[NodeId]) -> GraphSnapshot {
    let mut snapshot = GraphSnapshot::default();

    for &id in selected {
        match graph.node(id) {
            Some(node) => snapshot.nodes.push(capture_node(graph, node)),
            None => warn!("Selected node {} is not in the tree, skipping", id),
        }
    }

    let names: HashSet<&str> = snapshot.nodes.iter().map(|n| n.name.as_str()).collect();
    for conn in &graph.connections {
        let (Some(from), Some(to)) = (graph.node(conn.from_node), graph.node(conn.to_node)) else {
            continue;
        };
        if !names.contains(from.name.as_str()) || !names.contains(to.name.as_str()) {
            continue;
        }
        snapshot.links.push(LinkSnapshot {
            from_node: from.name.clone(),
            from_socket_index: conn.from_port as i64,
            to_node: to.name.clone(),
            to_socket_index: conn.to_port as i64,
            from_socket: from.outputs.get(conn.from_port).map(|p| p.name.clone()),
            to_socket: to.inputs.get(conn.to_port).map(|p| p.name.clone()),
        });
    }

    debug!(
        "Captured {} nodes and {} links",
        snapshot.nodes.len(),
        snapshot.links.len()
    );
    snapshot
}

fn capture_node(graph: &NodeGraph, node: &Node) -> NodeSnapshot {
    let properties = CAPTURED_PROPERTIES
        .iter()
        .filter_map(|&name| node.property(name).map(|v| (name.to_string(), v.clone())))
        .collect();

    let inputs = node
        .inputs
        .iter()
        .enumerate()
        .filter(|(index, _)| !graph.is_input_linked(node.id, *index))
        .filter_map(|(index, port)| {
            port.default_value().map(|value| InputSnapshot {
                index,
                value: value.clone(),
            })
        })
        .collect();

    let special_data = match (&node.color_ramp, &node.mapping) {
        (Some(ramp), _) => Some(SpecialData::Ramp(capture_ramp(ramp))),
        (None, Some(mapping)) => Some(SpecialData::Curve(capture_curves(mapping))),
        (None, None) => None,
    };

    NodeSnapshot {
        name: node.name.clone(),
        type_id: node.type_id.clone(),
        location: node.location,
        width: node.width,
        inputs,
        properties,
        special_data,
    }
}

fn capture_ramp(ramp: &ColorRamp) -> RampData {
    RampData {
        color_mode: ramp.color_mode.clone(),
        interpolation: ramp.interpolation.clone(),
        elements: ramp
            .elements()
            .iter()
            .map(|e| RampElementData {
                position: e.position,
                color: e.color,
            })
            .collect(),
    }
}

fn capture_curves(mapping: &CurveMapping) -> CurveData {
    CurveData {
        curves: mapping
            .curves
            .iter()
            .map(|curve| {
                curve
                    .points()
                    .iter()
                    .map(|p| CurvePointData {
                        location: p.location,
                        handle_type: p.handle_type.clone(),
                    })
                    .collect()
            })
            .collect(),
        clip_min_x: mapping.clip_min_x,
        clip_min_y: mapping.clip_min_y,
        clip_max_x: mapping.clip_max_x,
        clip_max_y: mapping.clip_max_y,
        use_clip: mapping.use_clip,
    }
}
