use crate::{
    foundation::core::Viewport,
    foundation::error::OrreryResult,
    math::mat4::Mat4,
    scene::light::DirectionalLight,
    scene::node::{GeometryInfo, NodeId},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-node uniform block handed to the render target for each draw.
///
/// Both matrices are column-major `f32`, upload-ready for GL-style uniform
/// slots. This fixed, typed contract replaces per-name uniform lookups: a
/// target knows exactly what it receives per node.
pub struct NodeUniforms {
    /// Projection times world: model space straight to clip space.
    pub world_view_projection: Mat4,
    /// Inverse transpose of the world transform, for lighting normals.
    pub normal_matrix: Mat4,
}

/// The rendering collaborator behind the transform engine.
///
/// Implementations own every graphics concern: context acquisition, shader
/// compilation, buffer and texture setup, draw-call issuance. The engine
/// only tells them what to draw, in which order, and with which matrices.
/// [`CaptureTarget`](crate::CaptureTarget) is the built-in headless
/// implementation.
pub trait RenderTarget {
    /// Called once at the top of a frame, before any draws.
    ///
    /// A real backend clears and sizes its surface here; the default does
    /// nothing.
    fn begin_frame(&mut self, _viewport: Viewport) -> OrreryResult<()> {
        Ok(())
    }

    /// Draw one node's geometry with its resolved uniforms.
    ///
    /// Called once per node, in scene paint order. `lights` is the scene's
    /// light list, passed through untouched.
    fn draw_node(
        &mut self,
        id: NodeId,
        geometry: &GeometryInfo,
        uniforms: &NodeUniforms,
        lights: &[DirectionalLight],
    ) -> OrreryResult<()>;

    /// Called once after all draws in a frame; the default does nothing.
    fn end_frame(&mut self) -> OrreryResult<()> {
        Ok(())
    }
}
