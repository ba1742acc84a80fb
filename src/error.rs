//! Error types for the host graph model, the record store and snapshot payloads

use thiserror::Error;

use crate::nodes::NodeId;

/// Errors raised by the in-memory host graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// No factory is registered for the requested node type tag
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    /// A node type was registered twice or with inconsistent metadata
    #[error("Invalid node type registration for {type_id}: {reason}")]
    InvalidRegistration { type_id: String, reason: String },

    /// The node does not exist in this graph
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// The node type does not declare this property
    #[error("Node type {type_id} has no property '{property}'")]
    PropertyNotFound { type_id: String, property: String },

    /// The property exists but rejects the given value
    #[error("Property '{property}' rejects value {value}")]
    PropertyType { property: String, value: String },

    /// Socket index past the end of the node's socket list
    #[error("Socket index {index} out of range (node has {len} sockets)")]
    SocketOutOfRange { index: usize, len: usize },

    /// The socket cannot hold the given default value
    #[error("Socket '{socket}' cannot hold value {value}")]
    IncompatibleSocketValue { socket: String, value: String },

    /// Links must connect two different nodes
    #[error("Cannot link a node to itself")]
    SelfLink,

    /// A color ramp or curve rejected an element/point operation
    #[error("{0}")]
    SubObject(String),
}

/// Errors raised while reading or writing the record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Errors raised while decoding a stored snapshot payload
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The record carries no payload at all
    #[error("Record has no node data")]
    Empty,

    #[error("Failed to decode node data: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
pub type StoreResult<T> = Result<T, StoreError>;
