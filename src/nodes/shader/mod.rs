//! Built-in shader node types
//!
//! The node types a material node tree offers out of the box, grouped
//! the way the add-node menu groups them.

pub mod math;
pub mod shading;
pub mod textures;
pub mod utilities;

pub use math::*;
pub use shading::*;
pub use textures::*;
pub use utilities::*;

use crate::nodes::factory::{NodeFactory, NodeRegistry};
use log::error;
use once_cell::sync::Lazy;

static SHADER_REGISTRY: Lazy<NodeRegistry> = Lazy::new(NodeRegistry::shader);

/// Shared registry of the built-in shader node types
pub fn builtin_registry() -> &'static NodeRegistry {
    &SHADER_REGISTRY
}

fn register<T: NodeFactory>(registry: &mut NodeRegistry) {
    if let Err(e) = registry.register::<T>() {
        error!("Failed to register built-in node type: {}", e);
    }
}

/// Register every built-in shader node type
pub fn register_all(registry: &mut NodeRegistry) {
    register::<MathNodeFactory>(registry);
    register::<VectorMathNodeFactory>(registry);
    register::<MapRangeNodeFactory>(registry);
    register::<MixNodeFactory>(registry);
    register::<NoiseTextureNodeFactory>(registry);
    register::<VoronoiTextureNodeFactory>(registry);
    register::<WaveTextureNodeFactory>(registry);
    register::<BrickTextureNodeFactory>(registry);
    register::<PrincipledBsdfNodeFactory>(registry);
    register::<MaterialOutputNodeFactory>(registry);
    register::<ColorRampNodeFactory>(registry);
    register::<RgbCurvesNodeFactory>(registry);
    register::<VectorCurvesNodeFactory>(registry);
    register::<ValueNodeFactory>(registry);
}
