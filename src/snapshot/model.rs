//! Portable snapshot of a captured node subgraph
//!
//! Field names follow the document layout the holder has always written,
//! so payloads saved by earlier versions keep loading.

use crate::error::SnapshotError;
use crate::nodes::{PropertyValue, SocketValue};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Captured nodes plus the links running between them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(rename = "node", default)]
    pub nodes: Vec<NodeSnapshot>,
    #[serde(default)]
    pub links: Vec<LinkSnapshot>,
}

impl GraphSnapshot {
    /// Compact JSON, as embedded in a record
    pub fn encode(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a record payload. Nothing is applied unless this succeeds.
    pub fn decode(payload: &str) -> Result<Self, SnapshotError> {
        if payload.trim().is_empty() {
            return Err(SnapshotError::Empty);
        }
        Ok(serde_json::from_str(payload)?)
    }

    pub fn node(&self, name: &str) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

/// One captured node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Name in the source graph; links refer to nodes by this name
    pub name: String,
    #[serde(rename = "id")]
    pub type_id: String,
    pub location: Vec2,
    pub width: f32,
    /// Defaults of unlinked input sockets
    #[serde(default)]
    pub inputs: Vec<InputSnapshot>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_data: Option<SpecialData>,
}

/// Default value of the input socket at `index`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub index: usize,
    pub value: SocketValue,
}

/// Internal data of a node's color ramp or curve mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SpecialData {
    Ramp(RampData),
    Curve(CurveData),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampData {
    #[serde(default = "default_color_mode")]
    pub color_mode: String,
    #[serde(default = "default_interpolation")]
    pub interpolation: String,
    #[serde(default)]
    pub elements: Vec<RampElementData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampElementData {
    pub position: f32,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveData {
    /// One list of points per channel
    #[serde(default)]
    pub curves: Vec<Vec<CurvePointData>>,
    #[serde(default)]
    pub clip_min_x: f32,
    #[serde(default)]
    pub clip_min_y: f32,
    #[serde(default = "one")]
    pub clip_max_x: f32,
    #[serde(default = "one")]
    pub clip_max_y: f32,
    #[serde(default)]
    pub use_clip: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePointData {
    pub location: Vec2,
    #[serde(default = "default_handle_type")]
    pub handle_type: String,
}

/// Link between two captured nodes, by captured name and socket position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSnapshot {
    pub from_node: String,
    pub from_socket_index: i64,
    pub to_node: String,
    pub to_socket_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_socket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_socket: Option<String>,
}

fn default_color_mode() -> String {
    "RGB".to_string()
}

fn default_interpolation() -> String {
    "LINEAR".to_string()
}

fn default_handle_type() -> String {
    "AUTO".to_string()
}

fn one() -> f32 {
    1.0
}
