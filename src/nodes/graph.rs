//! Node graph data structures and operations

use super::factory::NodeRegistry;
use super::node::{Node, NodeId};
use super::port::PortId;
use crate::error::{GraphError, GraphResult};
use std::collections::BTreeMap;

/// Represents a link between an output socket and an input socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_port: PortId,
    pub to_node: NodeId,
    pub to_port: PortId,
}

impl Connection {
    /// Creates a new connection
    pub fn new(from_node: NodeId, from_port: PortId, to_node: NodeId, to_port: PortId) -> Self {
        Self {
            from_node,
            from_port,
            to_node,
            to_port,
        }
    }
}

/// A shader tree containing nodes and their links.
///
/// Nodes iterate in creation order.
#[derive(Debug, Clone, Default)]
pub struct NodeGraph {
    nodes: BTreeMap<NodeId, Node>,
    pub connections: Vec<Connection>,
    next_node_id: NodeId,
}

impl NodeGraph {
    /// Creates a new empty node graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, giving it a fresh id and a name unique in this graph
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        let id = self.next_node_id;
        node.id = id;
        node.name = self.unique_name(&node.name);
        self.nodes.insert(id, node);
        self.next_node_id += 1;
        id
    }

    /// Create a node of a registered type
    pub fn new_node(&mut self, registry: &NodeRegistry, type_id: &str) -> GraphResult<NodeId> {
        let node = registry.create_node(type_id)?;
        Ok(self.add_node(node))
    }

    /// Removes a node and all its connections
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.connections
            .retain(|conn| conn.from_node != node_id && conn.to_node != node_id);
        self.nodes.remove(&node_id)
    }

    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of the selected nodes, in creation order
    pub fn selected_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|n| n.select)
            .map(|n| n.id)
            .collect()
    }

    pub fn deselect_all(&mut self) {
        for node in self.nodes.values_mut() {
            node.select = false;
        }
    }

    /// Link an output socket to an input socket.
    ///
    /// An input holds at most one link; linking into an already linked
    /// input replaces the previous link.
    pub fn add_connection(&mut self, connection: Connection) -> GraphResult<()> {
        if connection.from_node == connection.to_node {
            return Err(GraphError::SelfLink);
        }

        let from = self
            .nodes
            .get(&connection.from_node)
            .ok_or(GraphError::NodeNotFound(connection.from_node))?;
        let to = self
            .nodes
            .get(&connection.to_node)
            .ok_or(GraphError::NodeNotFound(connection.to_node))?;
        if connection.from_port >= from.outputs.len() {
            return Err(GraphError::SocketOutOfRange {
                index: connection.from_port,
                len: from.outputs.len(),
            });
        }
        if connection.to_port >= to.inputs.len() {
            return Err(GraphError::SocketOutOfRange {
                index: connection.to_port,
                len: to.inputs.len(),
            });
        }

        self.connections
            .retain(|c| !(c.to_node == connection.to_node && c.to_port == connection.to_port));
        self.connections.push(connection);
        Ok(())
    }

    /// Helper to link by node ids and socket indices
    pub fn add_connection_by_ids(
        &mut self,
        from_node: NodeId,
        from_port: PortId,
        to_node: NodeId,
        to_port: PortId,
    ) -> GraphResult<()> {
        self.add_connection(Connection::new(from_node, from_port, to_node, to_port))
    }

    /// Whether input socket `port` of `node_id` has an incoming link
    pub fn is_input_linked(&self, node_id: NodeId, port: PortId) -> bool {
        self.connections
            .iter()
            .any(|c| c.to_node == node_id && c.to_port == port)
    }

    /// `base`, or `base.001`, `base.002`, ... whichever is free first
    fn unique_name(&self, base: &str) -> String {
        let taken = |candidate: &str| self.nodes.values().any(|n| n.name == candidate);
        if !taken(base) {
            return base.to_string();
        }
        (1..)
            .map(|i| format!("{}.{:03}", base, i))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| base.to_string())
    }
}
