use crate::{
    foundation::core::Viewport,
    foundation::error::{OrreryError, OrreryResult},
    math::mat4::Mat4,
    render::target::{NodeUniforms, RenderTarget},
    scene::camera::Camera,
    scene::graph::Scene,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Per-frame counters returned by [`render_frame`].
pub struct FrameStats {
    /// Number of nodes drawn this frame.
    pub nodes_drawn: usize,
}

#[tracing::instrument(skip(scene, target), fields(nodes = scene.len()))]
/// Render one frame of `scene` through `target`.
///
/// Validates the scene and camera, derives the projection from the current
/// viewport aspect, then walks nodes in paint (insertion) order. Every
/// node's local and world transforms are recomputed from authored state;
/// its draw receives `projection * world` and the world inverse transpose
/// in [`NodeUniforms`], plus the scene's light list.
///
/// Frame scheduling is the caller's concern; call this once per display
/// refresh. The pass only reads the scene, so all mutation happens between
/// calls.
pub fn render_frame(
    scene: &Scene,
    camera: &Camera,
    viewport: Viewport,
    target: &mut dyn RenderTarget,
) -> OrreryResult<FrameStats> {
    scene.validate()?;
    camera.validate()?;
    if viewport.width == 0 || viewport.height == 0 {
        return Err(OrreryError::validation("viewport width/height must be > 0"));
    }

    let projection = camera.projection_matrix(viewport.aspect());

    target.begin_frame(viewport)?;
    let mut stats = FrameStats::default();
    for id in scene.node_ids() {
        let node = scene.node(id)?;
        let world = scene.world_transform(id)?;
        let uniforms = NodeUniforms {
            world_view_projection: Mat4::compose(&[projection, world]),
            normal_matrix: world.normal_matrix(),
        };
        target.draw_node(id, &node.geometry, &uniforms, scene.lights())?;
        stats.nodes_drawn += 1;
    }
    target.end_frame()?;

    tracing::debug!(nodes_drawn = stats.nodes_drawn, "frame rendered");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
