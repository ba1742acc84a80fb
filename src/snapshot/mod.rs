//! Subgraph snapshots - capture a selection, apply it to another tree
//!
//! Only a fixed set of node properties travels with a snapshot. They are
//! the settings that pick a node's variant (math operation, blend mode,
//! noise type, ...); everything else is either derived or carried by
//! socket defaults.

pub mod apply;
pub mod capture;
pub mod model;

pub use apply::{apply, resolve_socket, Applied, ApplyIssue, LinkFailure};
pub use capture::{capture, capture_selection};
pub use model::{
    CurveData, CurvePointData, GraphSnapshot, InputSnapshot, LinkSnapshot, NodeSnapshot,
    RampData, RampElementData, SpecialData,
};

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Node properties recorded in a snapshot. A snapshot stores them
/// keyed by name, so encoded payloads list them alphabetically.
pub const CAPTURED_PROPERTIES: &[&str] = &[
    "operation",          // Math, Vector Math
    "blend_type",         // Mix
    "data_type",          // Mix, Map Range
    "mode",
    "distribution",       // Principled BSDF
    "subsurface_method",  // Principled BSDF
    "noise_dimensions",   // Noise Texture
    "noise_type",         // Noise Texture
    "normalize",          // Noise, Voronoi
    "feature",            // Voronoi
    "distance",           // Voronoi
    "use_clamp",          // Math
    "clamp_result",       // Mix
    "clamp_factor",       // Mix
    "interpolation_type", // Map Range
    "color_mode",
    "wave_type",          // Wave Texture
    "wave_profile",       // Wave Texture
    "rings_direction",    // Wave Texture
];

static CAPTURED_PROPERTY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CAPTURED_PROPERTIES.iter().copied().collect());

/// Whether `name` is one of the properties snapshots carry
pub fn is_captured_property(name: &str) -> bool {
    CAPTURED_PROPERTY_SET.contains(name)
}
