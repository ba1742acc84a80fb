//! Property and socket values as they appear on live nodes and in snapshots

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a configurable node property (enum items are carried as strings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    Text(String),
}

impl PropertyValue {
    /// Enum item or string content, if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether two values are of the same kind (used for assignment checks)
    pub fn same_kind(&self, other: &PropertyValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}

/// Default value of an input socket.
///
/// Vectors and colors are plain fixed-length sequences so they survive
/// a trip through JSON without any host-side references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocketValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    Array(Vec<f32>),
    Text(String),
}

impl SocketValue {
    pub fn vector(v: [f32; 3]) -> Self {
        SocketValue::Array(v.to_vec())
    }

    pub fn color(c: [f32; 4]) -> Self {
        SocketValue::Array(c.to_vec())
    }

    /// Scalar view of the value (ints widen to floats)
    pub fn as_float(&self) -> Option<f32> {
        match self {
            SocketValue::Float(v) => Some(*v),
            SocketValue::Int(i) => Some(*i as f32),
            _ => None,
        }
    }
}

impl fmt::Display for SocketValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocketValue::Bool(b) => write!(f, "{}", b),
            SocketValue::Int(i) => write!(f, "{}", i),
            SocketValue::Float(v) => write!(f, "{}", v),
            SocketValue::Array(values) => write!(f, "{:?}", values),
            SocketValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_decoding_picks_narrowest_kind() {
        let values: Vec<SocketValue> =
            serde_json::from_str(r#"[true, 3, 0.5, [1.0, 0.0, 0.0, 1.0], "uv"]"#).unwrap();
        assert_eq!(values[0], SocketValue::Bool(true));
        assert_eq!(values[1], SocketValue::Int(3));
        assert_eq!(values[2], SocketValue::Float(0.5));
        assert_eq!(values[3], SocketValue::color([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(values[4], SocketValue::Text("uv".to_string()));
    }

    #[test]
    fn test_property_kind_comparison() {
        assert!(PropertyValue::from("ADD").same_kind(&PropertyValue::from("MULTIPLY")));
        assert!(!PropertyValue::from("ADD").same_kind(&PropertyValue::Bool(true)));
        assert_eq!(PropertyValue::from("ADD").as_str(), Some("ADD"));
    }
}
