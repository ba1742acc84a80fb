//! Rebuild a [`GraphSnapshot`] inside a target tree
//!
//! Reconstruction is best effort. A node whose type cannot be created, a
//! property or socket value the new node rejects, or a link that no longer
//! resolves is skipped on its own and reported as an [`ApplyIssue`]; the
//! rest of the snapshot is still built. Nothing is rolled back.

use super::model::{CurveData, GraphSnapshot, LinkSnapshot, NodeSnapshot, RampData, SpecialData};
use super::is_captured_property;
use crate::constants::{curve::APPEND_LOCATION, ramp::APPEND_POSITION};
use crate::error::GraphError;
use crate::nodes::{ColorRamp, CurveMapping, Node, NodeGraph, NodeId, NodeRegistry, Port};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt;

/// Why a single link could not be rebuilt
#[derive(Debug, Clone, PartialEq)]
pub enum LinkFailure {
    /// No node was created for this captured name
    MissingNode(String),
    /// The recorded socket does not exist on the new node
    SocketIndex { node: String, index: i64 },
    /// The graph refused the link
    Rejected(GraphError),
}

/// Something `apply` skipped
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyIssue {
    NodeSkipped { name: String, error: GraphError },
    Property { node: String, property: String, error: GraphError },
    Socket { node: String, index: usize, error: GraphError },
    SubObject { node: String, error: GraphError },
    Link { from_node: String, to_node: String, failure: LinkFailure },
}

impl fmt::Display for ApplyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyIssue::NodeSkipped { name, error } => write!(f, "Node '{}' skipped: {}", name, error),
            ApplyIssue::Property { node, property, error } => {
                write!(f, "Property error on '{}'.{}: {}", node, property, error)
            }
            ApplyIssue::Socket { node, index, error } => {
                write!(f, "Input {} of '{}' not set: {}", index, node, error)
            }
            ApplyIssue::SubObject { node, error } => write!(f, "'{}': {}", node, error),
            ApplyIssue::Link { from_node, to_node, failure } => match failure {
                LinkFailure::MissingNode(name) => write!(
                    f,
                    "Link error {} -> {}: node mapping failed for '{}'",
                    from_node, to_node, name
                ),
                LinkFailure::SocketIndex { node, index } => write!(
                    f,
                    "Link error {} -> {}: socket index {} mismatch on '{}'",
                    from_node, to_node, index, node
                ),
                LinkFailure::Rejected(error) => {
                    write!(f, "Link error {} -> {}: {}", from_node, to_node, error)
                }
            },
        }
    }
}

/// Outcome of [`apply`]
#[derive(Debug, Clone, Default)]
pub struct Applied {
    /// Ids of the new nodes, in snapshot order
    pub nodes: Vec<NodeId>,
    /// Links actually created
    pub links: usize,
    pub issues: Vec<ApplyIssue>,
}

impl Applied {
    fn skip(&mut self, issue: ApplyIssue) {
        warn!("{}", issue);
        self.issues.push(issue);
    }

    /// Number of nodes that could not be created
    pub fn skipped_nodes(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, ApplyIssue::NodeSkipped { .. }))
            .count()
    }
}

/// Build the snapshot's nodes and links in `graph`.
///
/// Existing nodes are deselected first so that afterwards exactly the
/// new nodes are selected.
pub fn apply(snapshot: &GraphSnapshot, graph: &mut NodeGraph, registry: &NodeRegistry) -> Applied {
    let mut applied = Applied::default();
    graph.deselect_all();

    // captured name -> new node; the graph hands out fresh names
    let mut node_map: HashMap<&str, NodeId> = HashMap::new();

    for data in &snapshot.nodes {
        let id = match graph.new_node(registry, &data.type_id) {
            Ok(id) => id,
            Err(error) => {
                applied.skip(ApplyIssue::NodeSkipped {
                    name: data.name.clone(),
                    error,
                });
                continue;
            }
        };
        node_map.insert(data.name.as_str(), id);
        applied.nodes.push(id);

        if let Some(node) = graph.node_mut(id) {
            node.location = data.location;
            node.width = data.width;
            node.select = true;
            restore_node(node, data, &mut applied);
        }
    }

    for link in &snapshot.links {
        match restore_link(graph, &node_map, link) {
            Ok(()) => applied.links += 1,
            Err(failure) => applied.skip(ApplyIssue::Link {
                from_node: link.from_node.clone(),
                to_node: link.to_node.clone(),
                failure,
            }),
        }
    }

    info!(
        "Applied {} of {} nodes and {} of {} links",
        applied.nodes.len(),
        snapshot.nodes.len(),
        applied.links,
        snapshot.links.len()
    );
    applied
}

fn restore_node(node: &mut Node, data: &NodeSnapshot, applied: &mut Applied) {
    for (property, value) in &data.properties {
        if !is_captured_property(property) {
            debug!("Ignoring uncaptured property '{}' on '{}'", property, data.name);
            continue;
        }
        if let Err(error) = node.set_property(property, value.clone()) {
            applied.skip(ApplyIssue::Property {
                node: data.name.clone(),
                property: property.clone(),
                error,
            });
        }
    }

    for input in &data.inputs {
        if input.index >= node.inputs.len() {
            warn!("'{}' has no input {}, default dropped", data.name, input.index);
            continue;
        }
        if let Err(error) = node.set_input_default(input.index, &input.value) {
            applied.skip(ApplyIssue::Socket {
                node: data.name.clone(),
                index: input.index,
                error,
            });
        }
    }

    let errors = match (&data.special_data, &mut node.color_ramp, &mut node.mapping) {
        (Some(SpecialData::Ramp(ramp_data)), Some(ramp), _) => restore_ramp(ramp, ramp_data),
        (Some(SpecialData::Curve(curve_data)), _, Some(mapping)) => restore_curves(mapping, curve_data),
        (Some(_), _, _) => {
            debug!("'{}' has no matching sub-object, special data dropped", data.name);
            Vec::new()
        }
        (None, _, _) => Vec::new(),
    };
    for error in errors {
        applied.skip(ApplyIssue::SubObject {
            node: data.name.clone(),
            error,
        });
    }
}

/// Grow or shrink the ramp to the saved element count, then write each element
fn restore_ramp(ramp: &mut ColorRamp, data: &RampData) -> Vec<GraphError> {
    let mut errors = Vec::new();
    if let Err(e) = ramp.set_color_mode(&data.color_mode) {
        errors.push(e);
    }
    if let Err(e) = ramp.set_interpolation(&data.interpolation) {
        errors.push(e);
    }

    let target = data.elements.len();
    while ramp.len() < target {
        if let Err(e) = ramp.new_element(APPEND_POSITION) {
            errors.push(e);
            break;
        }
    }
    while ramp.len() > target {
        if let Err(e) = ramp.remove_element(ramp.len() - 1) {
            errors.push(e);
            break;
        }
    }

    for (element, saved) in ramp.elements_mut().iter_mut().zip(&data.elements) {
        element.position = saved.position;
        element.color = saved.color;
    }
    errors
}

/// Restore clip settings and each saved channel, then rebake the mapping
fn restore_curves(mapping: &mut CurveMapping, data: &CurveData) -> Vec<GraphError> {
    let mut errors = Vec::new();
    mapping.clip_min_x = data.clip_min_x;
    mapping.clip_min_y = data.clip_min_y;
    mapping.clip_max_x = data.clip_max_x;
    mapping.clip_max_y = data.clip_max_y;
    mapping.use_clip = data.use_clip;

    for (curve, saved) in mapping.curves.iter_mut().zip(&data.curves) {
        let target = saved.len();
        while curve.len() < target {
            curve.new_point(APPEND_LOCATION[0], APPEND_LOCATION[1]);
        }
        while curve.len() > target {
            if let Err(e) = curve.remove_point(curve.len() - 1) {
                errors.push(e);
                break;
            }
        }

        for (point, saved_point) in curve.points_mut().iter_mut().zip(saved) {
            point.location = saved_point.location;
            if let Err(e) = point.set_handle_type(&saved_point.handle_type) {
                errors.push(e);
            }
        }
    }

    mapping.update();
    errors
}

/// Pick the socket a recorded link end refers to.
///
/// The socket at the recorded index wins when its name matches (or no name
/// was recorded). Otherwise the first socket carrying the recorded name is
/// used, and failing that the recorded index as-is.
pub fn resolve_socket(sockets: &[Port], index: i64, name: Option<&str>) -> Option<usize> {
    let positional = usize::try_from(index).ok().filter(|&i| i < sockets.len());
    let Some(name) = name else {
        return positional;
    };
    if let Some(i) = positional {
        if sockets[i].name == name {
            return Some(i);
        }
    }
    sockets.iter().position(|s| s.name == name).or(positional)
}

fn restore_link(
    graph: &mut NodeGraph,
    node_map: &HashMap<&str, NodeId>,
    link: &LinkSnapshot,
) -> Result<(), LinkFailure> {
    let lookup = |name: &str| {
        node_map
            .get(name)
            .copied()
            .ok_or_else(|| LinkFailure::MissingNode(name.to_string()))
    };
    let from_id = lookup(&link.from_node)?;
    let to_id = lookup(&link.to_node)?;

    let from = graph
        .node(from_id)
        .ok_or_else(|| LinkFailure::MissingNode(link.from_node.clone()))?;
    let to = graph
        .node(to_id)
        .ok_or_else(|| LinkFailure::MissingNode(link.to_node.clone()))?;

    let from_port = resolve_socket(&from.outputs, link.from_socket_index, link.from_socket.as_deref())
        .ok_or_else(|| LinkFailure::SocketIndex {
            node: link.from_node.clone(),
            index: link.from_socket_index,
        })?;
    let to_port = resolve_socket(&to.inputs, link.to_socket_index, link.to_socket.as_deref())
        .ok_or_else(|| LinkFailure::SocketIndex {
            node: link.to_node.clone(),
            index: link.to_socket_index,
        })?;

    graph
        .add_connection_by_ids(from_id, from_port, to_id, to_port)
        .map_err(LinkFailure::Rejected)
}
