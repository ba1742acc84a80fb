//! Socket types and default-value handling for node connections

use super::value::SocketValue;
use crate::error::{GraphError, GraphResult};

/// Positional index of a socket within its node's input or output list
pub type PortId = usize;

/// Data carried by a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketKind {
    Float,
    Int,
    Bool,
    /// 3-component vector
    Vector,
    /// RGBA color
    Color,
    String,
    /// Closure socket, never has a default value
    Shader,
}

impl SocketKind {
    /// Default value a freshly created socket of this kind carries
    pub fn initial_value(&self) -> Option<SocketValue> {
        match self {
            SocketKind::Float => Some(SocketValue::Float(0.0)),
            SocketKind::Int => Some(SocketValue::Int(0)),
            SocketKind::Bool => Some(SocketValue::Bool(false)),
            SocketKind::Vector => Some(SocketValue::vector([0.0; 3])),
            SocketKind::Color => Some(SocketValue::color([0.8, 0.8, 0.8, 1.0])),
            SocketKind::String => Some(SocketValue::Text(String::new())),
            SocketKind::Shader => None,
        }
    }

    /// Convert a value for storage in a socket of this kind, if compatible
    fn coerce(&self, value: &SocketValue) -> Option<SocketValue> {
        match (self, value) {
            (SocketKind::Float, v) => v.as_float().map(SocketValue::Float),
            (SocketKind::Int, SocketValue::Int(i)) => Some(SocketValue::Int(*i)),
            (SocketKind::Bool, SocketValue::Bool(b)) => Some(SocketValue::Bool(*b)),
            (SocketKind::Vector, SocketValue::Array(v)) if v.len() == 3 => Some(value.clone()),
            (SocketKind::Color, SocketValue::Array(v)) if v.len() == 4 => Some(value.clone()),
            (SocketKind::String, SocketValue::Text(_)) => Some(value.clone()),
            _ => None,
        }
    }
}

/// Type of port (input or output)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortType {
    Input,
    Output,
}

/// Represents a connection point on a node
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub port_type: PortType,
    pub kind: SocketKind,
    default_value: Option<SocketValue>,
}

impl Port {
    /// Creates a new port carrying the kind's initial default
    pub fn new(id: PortId, name: impl Into<String>, port_type: PortType, kind: SocketKind) -> Self {
        Self {
            id,
            name: name.into(),
            port_type,
            kind,
            default_value: kind.initial_value(),
        }
    }

    /// Current default value; `None` for shader sockets
    pub fn default_value(&self) -> Option<&SocketValue> {
        self.default_value.as_ref()
    }

    /// Assign the default value, enforcing the socket kind
    pub fn set_default_value(&mut self, value: &SocketValue) -> GraphResult<()> {
        let incompatible = || GraphError::IncompatibleSocketValue {
            socket: self.name.clone(),
            value: value.to_string(),
        };
        if self.default_value.is_none() {
            return Err(incompatible());
        }
        let coerced = self.kind.coerce(value).ok_or_else(incompatible)?;
        self.default_value = Some(coerced);
        Ok(())
    }
}
