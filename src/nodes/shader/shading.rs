//! Shader and output nodes

use crate::nodes::factory::{NodeFactory, NodeMetadata, PortDefinition, PropertyDefinition};
use crate::nodes::port::SocketKind;
use crate::nodes::value::SocketValue;

/// Principled BSDF (`ShaderNodeBsdfPrincipled`)
pub struct PrincipledBsdfNodeFactory;

impl NodeFactory for PrincipledBsdfNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeBsdfPrincipled", "Principled BSDF")
            .with_width(240.0)
            .with_inputs(vec![
                PortDefinition::new("Base Color", SocketKind::Color)
                    .with_default(SocketValue::color([0.8, 0.8, 0.8, 1.0])),
                PortDefinition::new("Metallic", SocketKind::Float),
                PortDefinition::new("Roughness", SocketKind::Float).with_default(SocketValue::Float(0.5)),
                PortDefinition::new("IOR", SocketKind::Float).with_default(SocketValue::Float(1.5)),
                PortDefinition::new("Alpha", SocketKind::Float).with_default(SocketValue::Float(1.0)),
                PortDefinition::new("Normal", SocketKind::Vector),
                PortDefinition::new("Emission Color", SocketKind::Color)
                    .with_default(SocketValue::color([1.0, 1.0, 1.0, 1.0])),
                PortDefinition::new("Emission Strength", SocketKind::Float),
            ])
            .with_outputs(vec![PortDefinition::new("BSDF", SocketKind::Shader)])
            .with_properties(vec![
                PropertyDefinition::enumeration("distribution", &["GGX", "MULTI_GGX"], "MULTI_GGX"),
                PropertyDefinition::enumeration(
                    "subsurface_method",
                    &["BURLEY", "RANDOM_WALK", "RANDOM_WALK_SKIN"],
                    "RANDOM_WALK",
                ),
            ])
    }
}

/// Material output (`ShaderNodeOutputMaterial`)
pub struct MaterialOutputNodeFactory;

impl NodeFactory for MaterialOutputNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeOutputMaterial", "Material Output")
            .with_inputs(vec![
                PortDefinition::new("Surface", SocketKind::Shader),
                PortDefinition::new("Volume", SocketKind::Shader),
                PortDefinition::new("Displacement", SocketKind::Vector),
            ])
            .with_properties(vec![PropertyDefinition::enumeration(
                "target",
                &["ALL", "EEVEE", "CYCLES"],
                "ALL",
            )])
    }
}
