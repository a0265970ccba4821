use crate::{
    foundation::core::Viewport,
    foundation::error::{OrreryError, OrreryResult},
    render::target::{NodeUniforms, RenderTarget},
    scene::light::DirectionalLight,
    scene::node::{GeometryInfo, NodeId},
};

#[derive(Clone, Debug, serde::Serialize)]
/// One recorded draw call.
pub struct CapturedDraw {
    /// Node the draw came from.
    pub node: NodeId,
    /// Vertex count passed through from the node's geometry.
    pub vertex_count: u32,
    /// Uniforms exactly as handed to the target.
    pub uniforms: NodeUniforms,
    /// Lights exactly as handed to the target.
    pub lights: Vec<DirectionalLight>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// All draws of one frame, in submission order.
pub struct CapturedFrame {
    /// Viewport the frame began with.
    pub viewport: Viewport,
    /// Draws in submission order.
    pub draws: Vec<CapturedDraw>,
}

#[derive(Debug, Default)]
/// A render target that records every call instead of drawing.
///
/// Always available, no graphics device required. Captured frames
/// serialize, which makes snapshot-style assertions on transform output a
/// one-liner in tests.
pub struct CaptureTarget {
    frames: Vec<CapturedFrame>,
    open: Option<CapturedFrame>,
}

impl CaptureTarget {
    /// Create an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed frames, oldest first.
    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// The most recently completed frame.
    pub fn last_frame(&self) -> Option<&CapturedFrame> {
        self.frames.last()
    }
}

impl RenderTarget for CaptureTarget {
    fn begin_frame(&mut self, viewport: Viewport) -> OrreryResult<()> {
        if self.open.is_some() {
            return Err(OrreryError::render("previous frame was never ended"));
        }
        self.open = Some(CapturedFrame {
            viewport,
            draws: Vec::new(),
        });
        Ok(())
    }

    fn draw_node(
        &mut self,
        id: NodeId,
        geometry: &GeometryInfo,
        uniforms: &NodeUniforms,
        lights: &[DirectionalLight],
    ) -> OrreryResult<()> {
        let Some(frame) = self.open.as_mut() else {
            return Err(OrreryError::render("draw_node called outside a frame"));
        };
        frame.draws.push(CapturedDraw {
            node: id,
            vertex_count: geometry.vertex_count,
            uniforms: *uniforms,
            lights: lights.to_vec(),
        });
        Ok(())
    }

    fn end_frame(&mut self) -> OrreryResult<()> {
        let Some(frame) = self.open.take() else {
            return Err(OrreryError::render("end_frame without begin_frame"));
        };
        self.frames.push(frame);
        Ok(())
    }
}
