//! Color, ramp, curve and input nodes

use crate::nodes::factory::{NodeFactory, NodeMetadata, PortDefinition, PropertyDefinition, SubObject};
use crate::nodes::port::SocketKind;
use crate::nodes::value::SocketValue;

const BLEND_TYPES: &[&str] = &[
    "MIX", "DARKEN", "MULTIPLY", "BURN", "LIGHTEN", "SCREEN", "DODGE", "ADD", "OVERLAY",
    "SOFT_LIGHT", "LINEAR_LIGHT", "DIFFERENCE", "EXCLUSION", "SUBTRACT", "DIVIDE", "HUE",
    "SATURATION", "COLOR", "VALUE",
];

/// Mix (`ShaderNodeMix`)
pub struct MixNodeFactory;

impl NodeFactory for MixNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeMix", "Mix")
            .with_inputs(vec![
                PortDefinition::new("Factor", SocketKind::Float).with_default(SocketValue::Float(0.5)),
                PortDefinition::new("A", SocketKind::Color)
                    .with_default(SocketValue::color([0.5, 0.5, 0.5, 1.0])),
                PortDefinition::new("B", SocketKind::Color)
                    .with_default(SocketValue::color([0.5, 0.5, 0.5, 1.0])),
            ])
            .with_outputs(vec![PortDefinition::new("Result", SocketKind::Color)])
            .with_properties(vec![
                PropertyDefinition::enumeration("data_type", &["FLOAT", "VECTOR", "RGBA", "ROTATION"], "FLOAT"),
                PropertyDefinition::enumeration("blend_type", BLEND_TYPES, "MIX"),
                PropertyDefinition::enumeration("factor_mode", &["UNIFORM", "NON_UNIFORM"], "UNIFORM"),
                PropertyDefinition::boolean("clamp_result", false),
                PropertyDefinition::boolean("clamp_factor", true),
            ])
    }
}

/// Color ramp (`ShaderNodeValToRGB`)
pub struct ColorRampNodeFactory;

impl NodeFactory for ColorRampNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeValToRGB", "Color Ramp")
            .with_width(240.0)
            .with_inputs(vec![
                PortDefinition::new("Fac", SocketKind::Float).with_default(SocketValue::Float(0.5)),
            ])
            .with_outputs(vec![
                PortDefinition::new("Color", SocketKind::Color),
                PortDefinition::new("Alpha", SocketKind::Float),
            ])
            .with_sub_object(SubObject::ColorRamp)
    }
}

/// RGB curves (`ShaderNodeRGBCurve`)
pub struct RgbCurvesNodeFactory;

impl NodeFactory for RgbCurvesNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeRGBCurve", "RGB Curves")
            .with_width(240.0)
            .with_inputs(vec![
                PortDefinition::new("Fac", SocketKind::Float).with_default(SocketValue::Float(1.0)),
                PortDefinition::new("Color", SocketKind::Color)
                    .with_default(SocketValue::color([1.0, 1.0, 1.0, 1.0])),
            ])
            .with_outputs(vec![PortDefinition::new("Color", SocketKind::Color)])
            .with_sub_object(SubObject::RgbCurves)
    }
}

/// Vector curves (`ShaderNodeVectorCurve`)
pub struct VectorCurvesNodeFactory;

impl NodeFactory for VectorCurvesNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeVectorCurve", "Vector Curves")
            .with_width(240.0)
            .with_inputs(vec![
                PortDefinition::new("Fac", SocketKind::Float).with_default(SocketValue::Float(1.0)),
                PortDefinition::new("Vector", SocketKind::Vector),
            ])
            .with_outputs(vec![PortDefinition::new("Vector", SocketKind::Vector)])
            .with_sub_object(SubObject::VectorCurves)
    }
}

/// Constant value (`ShaderNodeValue`)
pub struct ValueNodeFactory;

impl NodeFactory for ValueNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeValue", "Value").with_outputs(vec![
            PortDefinition::new("Value", SocketKind::Float).with_default(SocketValue::Float(0.5)),
        ])
    }
}
