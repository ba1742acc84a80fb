//! Node system - the in-memory shader tree the holder captures from and applies to

// Core node system modules
pub mod graph;
pub mod node;
pub mod port;
pub mod value;
pub mod factory;
pub mod ramp;
pub mod curve;

// Built-in node types
pub mod shader;

// Re-export core types
pub use graph::{Connection, NodeGraph};
pub use node::{Node, NodeId, PropertySlot};
pub use port::{Port, PortId, PortType, SocketKind};
pub use value::{PropertyValue, SocketValue};
pub use ramp::{ColorRamp, ColorRampElement};
pub use curve::{CurveMap, CurveMapPoint, CurveMapping};

// Re-export factory types
pub use factory::{
    NodeFactory, NodeMetadata, NodeRegistry,
    PortDefinition, PropertyDefinition, SubObject,
};
