use crate::{
    foundation::error::{OrreryError, OrreryResult},
    math::mat4::Mat4,
};

// Stock vertical field of view: 40 degrees.
const DEFAULT_FOV_Y_RAD: f32 = 40.0 * std::f32::consts::PI / 180.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Clip-space projection choice.
pub enum Projection {
    /// Perspective projection driven by the camera's field of view.
    Perspective,
    /// Orthographic projection; width follows the viewport aspect.
    Orthographic {
        /// Half the vertical extent of the view volume, in world units.
        half_height: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Viewing parameters, turned into a projection matrix every frame.
///
/// The camera sits at the origin looking down `-Z`; there is no view
/// matrix, scenes are authored directly in view space. The projection is
/// derived from the live viewport aspect by the frame pass, never stored.
pub struct Camera {
    /// Vertical field of view in radians; used by perspective projection.
    pub fov_y_rad: f32,
    /// Near clip distance.
    pub z_near: f32,
    /// Far clip distance.
    pub z_far: f32,
    /// Projection kind.
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_rad: DEFAULT_FOV_Y_RAD,
            z_near: 1.0,
            z_far: 2000.0,
            projection: Projection::Perspective,
        }
    }
}

impl Camera {
    /// Validate camera parameters.
    pub fn validate(&self) -> OrreryResult<()> {
        if !self.z_near.is_finite() || !self.z_far.is_finite() || self.z_near >= self.z_far {
            return Err(OrreryError::validation(
                "camera must have finite z_near < z_far",
            ));
        }
        match self.projection {
            Projection::Perspective => {
                if !self.fov_y_rad.is_finite()
                    || self.fov_y_rad <= 0.0
                    || self.fov_y_rad >= std::f32::consts::PI
                {
                    return Err(OrreryError::validation("camera fov_y_rad must be in (0, pi)"));
                }
                if self.z_near <= 0.0 {
                    return Err(OrreryError::validation(
                        "camera z_near must be > 0 for perspective projection",
                    ));
                }
            }
            Projection::Orthographic { half_height } => {
                if !half_height.is_finite() || half_height <= 0.0 {
                    return Err(OrreryError::validation(
                        "camera orthographic half_height must be finite and > 0",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Projection matrix for the given viewport aspect (width over height).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match self.projection {
            Projection::Perspective => {
                Mat4::perspective(self.fov_y_rad, aspect, self.z_near, self.z_far)
            }
            Projection::Orthographic { half_height } => {
                let half_width = half_height * aspect;
                Mat4::orthographic(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.z_near,
                    self.z_far,
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/camera.rs"]
mod tests;
