//! Procedural texture nodes

use crate::nodes::factory::{NodeFactory, NodeMetadata, PortDefinition, PropertyDefinition};
use crate::nodes::port::SocketKind;
use crate::nodes::value::SocketValue;

fn float(name: &str, default: f32) -> PortDefinition {
    PortDefinition::new(name, SocketKind::Float).with_default(SocketValue::Float(default))
}

/// Noise texture (`ShaderNodeTexNoise`)
pub struct NoiseTextureNodeFactory;

impl NodeFactory for NoiseTextureNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeTexNoise", "Noise Texture")
            .with_width(150.0)
            .with_inputs(vec![
                PortDefinition::new("Vector", SocketKind::Vector),
                float("W", 0.0),
                float("Scale", 5.0),
                float("Detail", 2.0),
                float("Roughness", 0.5),
                float("Lacunarity", 2.0),
                float("Distortion", 0.0),
            ])
            .with_outputs(vec![
                PortDefinition::new("Fac", SocketKind::Float),
                PortDefinition::new("Color", SocketKind::Color),
            ])
            .with_properties(vec![
                PropertyDefinition::enumeration("noise_dimensions", &["1D", "2D", "3D", "4D"], "3D"),
                PropertyDefinition::enumeration(
                    "noise_type",
                    &["MULTIFRACTAL", "RIDGED_MULTIFRACTAL", "HYBRID_MULTIFRACTAL", "FBM", "HETERO_TERRAIN"],
                    "FBM",
                ),
                PropertyDefinition::boolean("normalize", true),
            ])
    }
}

/// Voronoi texture (`ShaderNodeTexVoronoi`)
pub struct VoronoiTextureNodeFactory;

impl NodeFactory for VoronoiTextureNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeTexVoronoi", "Voronoi Texture")
            .with_width(150.0)
            .with_inputs(vec![
                PortDefinition::new("Vector", SocketKind::Vector),
                float("W", 0.0),
                float("Scale", 5.0),
                float("Detail", 0.0),
                float("Roughness", 0.5),
                float("Lacunarity", 2.0),
                float("Smoothness", 1.0),
                float("Exponent", 0.5),
                float("Randomness", 1.0),
            ])
            .with_outputs(vec![
                PortDefinition::new("Distance", SocketKind::Float),
                PortDefinition::new("Color", SocketKind::Color),
                PortDefinition::new("Position", SocketKind::Vector),
                PortDefinition::new("W", SocketKind::Float),
                PortDefinition::new("Radius", SocketKind::Float),
            ])
            .with_properties(vec![
                PropertyDefinition::enumeration("voronoi_dimensions", &["1D", "2D", "3D", "4D"], "3D"),
                PropertyDefinition::enumeration(
                    "feature",
                    &["F1", "F2", "SMOOTH_F1", "DISTANCE_TO_EDGE", "N_SPHERE_RADIUS"],
                    "F1",
                ),
                PropertyDefinition::enumeration(
                    "distance",
                    &["EUCLIDEAN", "MANHATTAN", "CHEBYCHEV", "MINKOWSKI"],
                    "EUCLIDEAN",
                ),
                PropertyDefinition::boolean("normalize", false),
            ])
    }
}

/// Wave texture (`ShaderNodeTexWave`)
pub struct WaveTextureNodeFactory;

impl NodeFactory for WaveTextureNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeTexWave", "Wave Texture")
            .with_width(150.0)
            .with_inputs(vec![
                PortDefinition::new("Vector", SocketKind::Vector),
                float("Scale", 5.0),
                float("Distortion", 0.0),
                float("Detail", 2.0),
                float("Detail Scale", 1.0),
                float("Detail Roughness", 0.5),
                float("Phase Offset", 0.0),
            ])
            .with_outputs(vec![
                PortDefinition::new("Color", SocketKind::Color),
                PortDefinition::new("Fac", SocketKind::Float),
            ])
            .with_properties(vec![
                PropertyDefinition::enumeration("wave_type", &["BANDS", "RINGS"], "BANDS"),
                PropertyDefinition::enumeration("bands_direction", &["X", "Y", "Z", "DIAGONAL"], "X"),
                PropertyDefinition::enumeration("rings_direction", &["X", "Y", "Z", "SPHERICAL"], "X"),
                PropertyDefinition::enumeration("wave_profile", &["SIN", "SAW", "TRI"], "SIN"),
            ])
    }
}

/// Brick texture (`ShaderNodeTexBrick`)
pub struct BrickTextureNodeFactory;

impl NodeFactory for BrickTextureNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeTexBrick", "Brick Texture")
            .with_width(150.0)
            .with_inputs(vec![
                PortDefinition::new("Vector", SocketKind::Vector),
                PortDefinition::new("Color1", SocketKind::Color)
                    .with_default(SocketValue::color([0.8, 0.8, 0.8, 1.0])),
                PortDefinition::new("Color2", SocketKind::Color)
                    .with_default(SocketValue::color([0.2, 0.2, 0.2, 1.0])),
                PortDefinition::new("Mortar", SocketKind::Color)
                    .with_default(SocketValue::color([0.0, 0.0, 0.0, 1.0])),
                float("Scale", 5.0),
                float("Mortar Size", 0.02),
                float("Mortar Smooth", 0.1),
                float("Bias", 0.0),
                float("Brick Width", 0.5),
                float("Row Height", 0.25),
            ])
            .with_outputs(vec![
                PortDefinition::new("Color", SocketKind::Color),
                PortDefinition::new("Fac", SocketKind::Float),
            ])
            .with_properties(vec![
                PropertyDefinition::integer("offset_frequency", 2),
                PropertyDefinition::integer("squash_frequency", 2),
            ])
    }
}
