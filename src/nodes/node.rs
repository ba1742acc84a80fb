//! Node types and core node functionality

use super::curve::CurveMapping;
use super::port::{Port, PortType, SocketKind};
use super::ramp::ColorRamp;
use super::value::{PropertyValue, SocketValue};
use crate::error::{GraphError, GraphResult};
use glam::Vec2;
use std::collections::BTreeMap;

/// Unique identifier for a node within its graph
pub type NodeId = usize;

/// Declared shape of a configurable property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySlot {
    pub value: PropertyValue,
    /// Legal enum items; `None` for non-enum properties
    pub items: Option<Vec<&'static str>>,
}

/// Core node structure representing a node in a shader tree
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// Unique within the owning graph
    pub name: String,
    /// Host node-type tag, e.g. `ShaderNodeMath`
    pub type_id: String,
    pub location: Vec2,
    pub width: f32,
    pub select: bool,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
    properties: BTreeMap<String, PropertySlot>,
    pub color_ramp: Option<ColorRamp>,
    pub mapping: Option<CurveMapping>,
}

impl Node {
    /// Creates a new node with no sockets or properties
    pub fn new(id: NodeId, type_id: impl Into<String>, location: Vec2) -> Self {
        let type_id = type_id.into();
        Self {
            id,
            name: type_id.clone(),
            type_id,
            location,
            width: crate::constants::node::DEFAULT_WIDTH,
            select: false,
            inputs: vec![],
            outputs: vec![],
            properties: BTreeMap::new(),
            color_ramp: None,
            mapping: None,
        }
    }

    /// Adds an input socket to the node
    pub fn add_input(&mut self, name: impl Into<String>, kind: SocketKind) -> &mut Port {
        let port_id = self.inputs.len();
        self.inputs.push(Port::new(port_id, name, PortType::Input, kind));
        &mut self.inputs[port_id]
    }

    /// Adds an output socket to the node
    pub fn add_output(&mut self, name: impl Into<String>, kind: SocketKind) -> &mut Port {
        let port_id = self.outputs.len();
        self.outputs.push(Port::new(port_id, name, PortType::Output, kind));
        &mut self.outputs[port_id]
    }

    /// Declares a property slot on this node
    pub fn declare_property(&mut self, name: impl Into<String>, slot: PropertySlot) {
        self.properties.insert(name.into(), slot);
    }

    /// Current value of a declared property
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name).map(|slot| &slot.value)
    }

    /// Set a declared property. Unknown keys and values of the wrong kind
    /// (or enum items the property does not list) are rejected.
    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> GraphResult<()> {
        let slot = self
            .properties
            .get_mut(name)
            .ok_or_else(|| GraphError::PropertyNotFound {
                type_id: self.type_id.clone(),
                property: name.to_string(),
            })?;

        let rejected = || GraphError::PropertyType {
            property: name.to_string(),
            value: value.to_string(),
        };
        let value = match (&slot.value, value.clone()) {
            (PropertyValue::Float(_), PropertyValue::Int(i)) => PropertyValue::Float(i as f32),
            (current, new) if current.same_kind(&new) => new,
            _ => return Err(rejected()),
        };
        if let (Some(items), Some(item)) = (&slot.items, value.as_str()) {
            if !items.contains(&item) {
                return Err(rejected());
            }
        }
        slot.value = value;
        Ok(())
    }

    /// Assign the default value of input socket `index`
    pub fn set_input_default(&mut self, index: usize, value: &SocketValue) -> GraphResult<()> {
        let len = self.inputs.len();
        self.inputs
            .get_mut(index)
            .ok_or(GraphError::SocketOutOfRange { index, len })?
            .set_default_value(value)
    }

    /// Sets the width of the node
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}
