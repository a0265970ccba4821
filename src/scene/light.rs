use crate::{
    foundation::error::{OrreryError, OrreryResult},
    math::vec3::Vec3,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A directional light, stored as a normalized travel direction.
///
/// The engine passes lights through to the render target without inspecting
/// them beyond iteration; shading is the target's business.
pub struct DirectionalLight {
    /// Unit-length direction the light travels.
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    // Key light angled down-right into the screen.
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.5, -0.7, -1.0).normalize(),
        }
    }
}

impl DirectionalLight {
    /// Build a light from any non-degenerate direction, normalizing it.
    pub fn new(direction: Vec3) -> OrreryResult<Self> {
        if !direction.is_finite() || direction.length() < 1e-6 {
            return Err(OrreryError::validation(
                "light direction must be finite and non-zero",
            ));
        }
        Ok(Self {
            direction: direction.normalize(),
        })
    }
}
