use crate::{
    foundation::core::Transform3D,
    math::{mat4::Mat4, vec3::Vec3},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Arena index of a node within a [`crate::Scene`].
///
/// Ids are handed out by [`crate::Scene::spawn`] in insertion order and stay
/// valid for the life of the scene; nodes are never removed from the arena.
pub struct NodeId(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Opaque description of a node's geometry.
///
/// The engine never reads vertex data. It carries the count through to the
/// render target untouched and uses the model-space center, when present, to
/// seed the transform pivot at spawn time.
pub struct GeometryInfo {
    /// Number of vertices the render target should draw.
    pub vertex_count: u32,
    /// Model-space center, for geometry not authored around the origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec3>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A transformable entity in the scene.
pub struct Node {
    /// Node name for authoring/debugging; appears in error messages.
    pub name: String,
    /// Authored local transform state.
    #[serde(default)]
    pub transform: Transform3D,
    /// Geometry descriptor passed through to the render target.
    #[serde(default)]
    pub geometry: GeometryInfo,
    /// Parent link; assigned only through [`crate::Scene::set_parent`] so the
    /// no-cycle invariant holds for programmatically built scenes.
    #[serde(default)]
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// The node's local transform, recomputed from authored state.
    pub fn local_transform(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// Current parent, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}
