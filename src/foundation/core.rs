use crate::foundation::error::{OrreryError, OrreryResult};
use crate::math::{mat4::Mat4, vec3::Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output surface dimensions in pixels.
///
/// The viewport is read fresh every frame; resizing between frames changes
/// the projection aspect with no other bookkeeping.
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport; both dimensions must be > 0.
    pub fn new(width: u32, height: u32) -> OrreryResult<Self> {
        if width == 0 || height == 0 {
            return Err(OrreryError::validation("viewport width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Width over height.
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Authored transform state of a node.
///
/// Rotation is per-axis Euler angles in radians, applied independently (not
/// an orientation quaternion). The pivot is the point rotation and scale act
/// about, in local space; geometry authored off-origin sets it to the
/// geometry center so spinning does not orbit the origin.
pub struct Transform3D {
    /// Offset from the parent origin, in world units.
    pub position: Vec3,
    /// Per-axis Euler angles in radians.
    pub rotation: Vec3,
    /// Per-axis scale factors; default (1, 1, 1).
    pub scale: Vec3,
    /// Rotation/scale pivot in local space.
    pub pivot: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            pivot: Vec3::ZERO,
        }
    }
}

impl Transform3D {
    /// Resolve the authored state into a local transform matrix.
    ///
    /// Applied to a point, the pivot is removed first, then scale, then
    /// rotation about Z, then Y, then X, then the pivot is restored and the
    /// position applied. Changing this order changes what every authored
    /// scene means; it is pinned by tests.
    pub fn to_matrix(self) -> Mat4 {
        let t_position = Mat4::translation(self.position);
        let t_pivot = Mat4::translation(self.pivot);
        let t_unpivot = Mat4::translation(-self.pivot);
        let r_x = Mat4::rotation_x(self.rotation.x);
        let r_y = Mat4::rotation_y(self.rotation.y);
        let r_z = Mat4::rotation_z(self.rotation.z);
        let s = Mat4::scale(self.scale);

        // Canonical order:
        // T(position) * T(pivot) * Rx * Ry * Rz * S(scale) * T(-pivot)
        t_position * t_pivot * r_x * r_y * r_z * s * t_unpivot
    }

    /// True when every component of every field is finite.
    pub fn is_finite(self) -> bool {
        self.position.is_finite()
            && self.rotation.is_finite()
            && self.scale.is_finite()
            && self.pivot.is_finite()
    }
}
