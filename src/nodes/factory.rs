//! Node factory system with self-registration and per-type metadata
//!
//! Every node type declares the sockets it is created with, the
//! configurable properties it understands and the sub-object it owns.
//! The registry validates that metadata once, at registration, so a
//! property lookup on a live node is a plain table lookup.

use crate::error::{GraphError, GraphResult};
use crate::nodes::curve::CurveMapping;
use crate::nodes::node::{Node, PropertySlot};
use crate::nodes::port::SocketKind;
use crate::nodes::ramp::ColorRamp;
use crate::nodes::value::{PropertyValue, SocketValue};
use glam::Vec2;
use log::debug;
use std::collections::{BTreeMap, HashSet};

/// Nested configurable structure a node type owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubObject {
    ColorRamp,
    RgbCurves,
    VectorCurves,
}

/// Socket definition for node creation
#[derive(Debug, Clone)]
pub struct PortDefinition {
    pub name: String,
    pub data_type: SocketKind,
    pub default: Option<SocketValue>,
}

impl PortDefinition {
    /// Socket with the kind's initial default
    pub fn new(name: &str, data_type: SocketKind) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            default: None,
        }
    }

    /// Override the default value the socket is created with
    pub fn with_default(mut self, default: SocketValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// Configurable property definition
#[derive(Debug, Clone)]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub default: PropertyValue,
    pub items: Option<Vec<&'static str>>,
}

impl PropertyDefinition {
    /// Enum property; `default` must be one of `items`
    pub fn enumeration(name: &'static str, items: &[&'static str], default: &'static str) -> Self {
        Self {
            name,
            default: PropertyValue::from(default),
            items: Some(items.to_vec()),
        }
    }

    pub fn boolean(name: &'static str, default: bool) -> Self {
        Self {
            name,
            default: PropertyValue::Bool(default),
            items: None,
        }
    }

    pub fn integer(name: &'static str, default: i64) -> Self {
        Self {
            name,
            default: PropertyValue::Int(default),
            items: None,
        }
    }
}

/// Metadata for a node type - the single source of truth for how it is built
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    pub node_type: &'static str,
    pub display_name: &'static str,
    pub width: f32,
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
    pub properties: Vec<PropertyDefinition>,
    pub sub_object: Option<SubObject>,
}

impl NodeMetadata {
    pub fn new(node_type: &'static str, display_name: &'static str) -> Self {
        Self {
            node_type,
            display_name,
            width: crate::constants::node::DEFAULT_WIDTH,
            inputs: vec![],
            outputs: vec![],
            properties: vec![],
            sub_object: None,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_properties(mut self, properties: Vec<PropertyDefinition>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_sub_object(mut self, sub_object: SubObject) -> Self {
        self.sub_object = Some(sub_object);
        self
    }

    /// Check the metadata is self-consistent
    fn validate(&self) -> GraphResult<()> {
        let invalid = |reason: String| GraphError::InvalidRegistration {
            type_id: self.node_type.to_string(),
            reason,
        };

        let mut seen = HashSet::new();
        for prop in &self.properties {
            if !seen.insert(prop.name) {
                return Err(invalid(format!("property '{}' declared twice", prop.name)));
            }
            if let Some(items) = &prop.items {
                match prop.default.as_str() {
                    Some(item) if items.contains(&item) => {}
                    _ => {
                        return Err(invalid(format!(
                            "default {} of '{}' is not one of its items",
                            prop.default, prop.name
                        )))
                    }
                }
            }
        }
        for port in self.inputs.iter().chain(&self.outputs) {
            if let Some(default) = &port.default {
                let mut probe = crate::nodes::port::Port::new(
                    0,
                    port.name.clone(),
                    crate::nodes::port::PortType::Input,
                    port.data_type,
                );
                probe
                    .set_default_value(default)
                    .map_err(|e| invalid(e.to_string()))?;
            }
        }
        Ok(())
    }
}

/// Node factory trait
pub trait NodeFactory {
    /// Get the node type's metadata
    fn metadata() -> NodeMetadata
    where
        Self: Sized;

    /// Create a node instance at the origin
    fn create() -> Node
    where
        Self: Sized,
    {
        build_node(&Self::metadata())
    }
}

/// Instantiate a node from metadata
fn build_node(meta: &NodeMetadata) -> Node {
    let mut node = Node::new(0, meta.node_type, Vec2::ZERO).with_width(meta.width);
    node.name = meta.display_name.to_string();

    for input in &meta.inputs {
        let port = node.add_input(&input.name, input.data_type);
        if let Some(default) = &input.default {
            // validated at registration
            let _ = port.set_default_value(default);
        }
    }
    for output in &meta.outputs {
        let port = node.add_output(&output.name, output.data_type);
        if let Some(default) = &output.default {
            let _ = port.set_default_value(default);
        }
    }
    for prop in &meta.properties {
        node.declare_property(
            prop.name,
            PropertySlot {
                value: prop.default.clone(),
                items: prop.items.clone(),
            },
        );
    }

    match meta.sub_object {
        Some(SubObject::ColorRamp) => node.color_ramp = Some(ColorRamp::default()),
        Some(SubObject::RgbCurves) => node.mapping = Some(CurveMapping::rgb()),
        Some(SubObject::VectorCurves) => node.mapping = Some(CurveMapping::vector()),
        None => {}
    }
    node
}

/// Registry of node types that can be created by type tag
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    types: BTreeMap<String, NodeMetadata>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in shader node type
    pub fn shader() -> Self {
        let mut registry = Self::new();
        crate::nodes::shader::register_all(&mut registry);
        registry
    }

    /// Register a node factory
    pub fn register<T: NodeFactory>(&mut self) -> GraphResult<()> {
        self.register_metadata(T::metadata())
    }

    /// Register a node type from its metadata
    pub fn register_metadata(&mut self, metadata: NodeMetadata) -> GraphResult<()> {
        if self.types.contains_key(metadata.node_type) {
            return Err(GraphError::InvalidRegistration {
                type_id: metadata.node_type.to_string(),
                reason: "type already registered".to_string(),
            });
        }
        metadata.validate()?;

        for prop in &metadata.properties {
            if !crate::snapshot::is_captured_property(prop.name) {
                debug!(
                    "{}: property '{}' is not captured in snapshots",
                    metadata.node_type, prop.name
                );
            }
        }
        self.types.insert(metadata.node_type.to_string(), metadata);
        Ok(())
    }

    /// Create a node by type tag
    pub fn create_node(&self, node_type: &str) -> GraphResult<Node> {
        match self.types.get(node_type) {
            Some(meta) => Ok(build_node(meta)),
            None => {
                debug!("No node type registered for '{}'", node_type);
                Err(GraphError::UnknownNodeType(node_type.to_string()))
            }
        }
    }

    pub fn metadata(&self, node_type: &str) -> Option<&NodeMetadata> {
        self.types.get(node_type)
    }

    pub fn contains(&self, node_type: &str) -> bool {
        self.types.contains_key(node_type)
    }

    /// Registered type tags in sorted order
    pub fn node_types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}
