//! Scene model: the node arena, parenting, cameras and lights.

/// Camera and projection parameters.
pub mod camera;
/// The node arena and parent-chain transforms.
pub mod graph;
/// Directional lights.
pub mod light;
/// Node types and geometry descriptors.
pub mod node;
