//! Math and conversion nodes

use crate::nodes::factory::{NodeFactory, NodeMetadata, PortDefinition, PropertyDefinition};
use crate::nodes::port::SocketKind;
use crate::nodes::value::SocketValue;

const MATH_OPERATIONS: &[&str] = &[
    "ADD", "SUBTRACT", "MULTIPLY", "DIVIDE", "MULTIPLY_ADD", "POWER", "LOGARITHM", "SQRT",
    "INVERSE_SQRT", "ABSOLUTE", "EXPONENT", "MINIMUM", "MAXIMUM", "LESS_THAN", "GREATER_THAN",
    "SIGN", "COMPARE", "SMOOTH_MIN", "SMOOTH_MAX", "ROUND", "FLOOR", "CEIL", "TRUNC", "FRACT",
    "MODULO", "FLOORED_MODULO", "WRAP", "SNAP", "PINGPONG", "SINE", "COSINE", "TANGENT",
    "ARCSINE", "ARCCOSINE", "ARCTANGENT", "ARCTAN2", "SINH", "COSH", "TANH", "RADIANS",
    "DEGREES",
];

const VECTOR_MATH_OPERATIONS: &[&str] = &[
    "ADD", "SUBTRACT", "MULTIPLY", "DIVIDE", "MULTIPLY_ADD", "CROSS_PRODUCT", "PROJECT",
    "REFLECT", "REFRACT", "FACEFORWARD", "DOT_PRODUCT", "DISTANCE", "LENGTH", "SCALE",
    "NORMALIZE", "ABSOLUTE", "POWER", "SIGN", "MINIMUM", "MAXIMUM", "FLOOR", "CEIL", "FRACTION",
    "MODULO", "WRAP", "SNAP", "SINE", "COSINE", "TANGENT",
];

/// Scalar math (`ShaderNodeMath`)
pub struct MathNodeFactory;

impl NodeFactory for MathNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeMath", "Math")
            .with_inputs(vec![
                PortDefinition::new("Value", SocketKind::Float).with_default(SocketValue::Float(0.5)),
                PortDefinition::new("Value", SocketKind::Float).with_default(SocketValue::Float(0.5)),
                PortDefinition::new("Value", SocketKind::Float).with_default(SocketValue::Float(0.5)),
            ])
            .with_outputs(vec![PortDefinition::new("Value", SocketKind::Float)])
            .with_properties(vec![
                PropertyDefinition::enumeration("operation", MATH_OPERATIONS, "ADD"),
                PropertyDefinition::boolean("use_clamp", false),
            ])
    }
}

/// Vector math (`ShaderNodeVectorMath`)
pub struct VectorMathNodeFactory;

impl NodeFactory for VectorMathNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeVectorMath", "Vector Math")
            .with_inputs(vec![
                PortDefinition::new("Vector", SocketKind::Vector),
                PortDefinition::new("Vector", SocketKind::Vector),
                PortDefinition::new("Vector", SocketKind::Vector),
                PortDefinition::new("Scale", SocketKind::Float).with_default(SocketValue::Float(1.0)),
            ])
            .with_outputs(vec![
                PortDefinition::new("Vector", SocketKind::Vector),
                PortDefinition::new("Value", SocketKind::Float),
            ])
            .with_properties(vec![PropertyDefinition::enumeration(
                "operation",
                VECTOR_MATH_OPERATIONS,
                "ADD",
            )])
    }
}

/// Remap a value between ranges (`ShaderNodeMapRange`)
pub struct MapRangeNodeFactory;

impl NodeFactory for MapRangeNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ShaderNodeMapRange", "Map Range")
            .with_inputs(vec![
                PortDefinition::new("Value", SocketKind::Float).with_default(SocketValue::Float(1.0)),
                PortDefinition::new("From Min", SocketKind::Float),
                PortDefinition::new("From Max", SocketKind::Float).with_default(SocketValue::Float(1.0)),
                PortDefinition::new("To Min", SocketKind::Float),
                PortDefinition::new("To Max", SocketKind::Float).with_default(SocketValue::Float(1.0)),
                PortDefinition::new("Steps", SocketKind::Float).with_default(SocketValue::Float(4.0)),
            ])
            .with_outputs(vec![PortDefinition::new("Result", SocketKind::Float)])
            .with_properties(vec![
                PropertyDefinition::enumeration("data_type", &["FLOAT", "FLOAT_VECTOR"], "FLOAT"),
                PropertyDefinition::enumeration(
                    "interpolation_type",
                    &["LINEAR", "STEPPED", "SMOOTHSTEP", "SMOOTHERSTEP"],
                    "LINEAR",
                ),
                PropertyDefinition::boolean("clamp", true),
            ])
    }
}
