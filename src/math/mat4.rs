use std::ops::Mul;

use crate::math::vec3::Vec3;

// Homogeneous w below this magnitude is treated as vanishing.
const W_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A 4x4 matrix of `f32` in column-major order.
///
/// Element `(row r, column c)` lives at index `c * 4 + r`, so `&m.0` is
/// uniform-upload-ready as-is. Points are column vectors multiplied on the
/// right: `M * p`.
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// The all-zero matrix, the defined result of inverting a singular matrix.
    pub const ZERO: Self = Self([0.0; 16]);

    /// Translation by `t`.
    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.0[12] = t.x;
        m.0[13] = t.y;
        m.0[14] = t.z;
        m
    }

    /// Rotation about the X axis by `rad` radians (right-handed: +Y toward +Z).
    pub fn rotation_x(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        let mut m = Self::IDENTITY;
        m.0[5] = c;
        m.0[6] = s;
        m.0[9] = -s;
        m.0[10] = c;
        m
    }

    /// Rotation about the Y axis by `rad` radians (right-handed: +Z toward +X).
    pub fn rotation_y(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        let mut m = Self::IDENTITY;
        m.0[0] = c;
        m.0[2] = -s;
        m.0[8] = s;
        m.0[10] = c;
        m
    }

    /// Rotation about the Z axis by `rad` radians (right-handed: +X toward +Y).
    pub fn rotation_z(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        let mut m = Self::IDENTITY;
        m.0[0] = c;
        m.0[1] = s;
        m.0[4] = -s;
        m.0[5] = c;
        m
    }

    /// Per-axis scale by `s`.
    pub fn scale(s: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.0[0] = s.x;
        m.0[5] = s.y;
        m.0[10] = s.z;
        m
    }

    /// Perspective projection from a vertical field of view.
    ///
    /// Right-handed, camera looking down `-Z`; depths `z_near` and `z_far`
    /// map to clip `z` of `-1` and `+1` after the perspective divide.
    /// Parameters are validated upstream ([`crate::Camera::validate`]).
    pub fn perspective(fov_y_rad: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let f = 1.0 / (fov_y_rad * 0.5).tan();
        let range_inv = 1.0 / (z_near - z_far);
        let mut m = Self::ZERO;
        m.0[0] = f / aspect;
        m.0[5] = f;
        m.0[10] = (z_near + z_far) * range_inv;
        m.0[11] = -1.0;
        m.0[14] = 2.0 * z_near * z_far * range_inv;
        m
    }

    /// Orthographic projection over the given view volume.
    ///
    /// Same depth convention as [`Mat4::perspective`]: camera down `-Z`,
    /// near plane to clip `-1`, far plane to clip `+1`.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = Self::IDENTITY;
        m.0[0] = 2.0 / (right - left);
        m.0[5] = 2.0 / (top - bottom);
        m.0[10] = -2.0 / (z_far - z_near);
        m.0[12] = -(right + left) / (right - left);
        m.0[13] = -(top + bottom) / (top - bottom);
        m.0[14] = -(z_far + z_near) / (z_far - z_near);
        m
    }

    /// Multiply an ordered sequence into one matrix.
    ///
    /// The first element is the outermost (last-applied) transform:
    /// `compose(&[a, b]) * p == a * (b * p)`. An empty slice yields
    /// [`Mat4::IDENTITY`]. World transforms are built this way, ancestors
    /// first: `compose(&[root, .., parent, local])`.
    pub fn compose(matrices: &[Mat4]) -> Self {
        matrices.iter().fold(Self::IDENTITY, |acc, m| acc * *m)
    }

    // Element at (row, col).
    #[inline]
    fn at(self, row: usize, col: usize) -> f32 {
        self.0[col * 4 + row]
    }

    /// Determinant, by cofactor expansion along the first column.
    pub fn determinant(self) -> f32 {
        (0..4).map(|r| self.at(r, 0) * self.cofactor(r, 0)).sum()
    }

    fn cofactor(self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col)
    }

    // Determinant of the 3x3 submatrix left after removing `row` and `col`.
    fn minor(self, row: usize, col: usize) -> f32 {
        let mut sub = [0.0f32; 9];
        let mut i = 0;
        for c in 0..4 {
            if c == col {
                continue;
            }
            for r in 0..4 {
                if r == row {
                    continue;
                }
                sub[i] = self.at(r, c);
                i += 1;
            }
        }
        // sub is column-major 3x3; expand along its first row.
        sub[0] * (sub[4] * sub[8] - sub[5] * sub[7])
            - sub[3] * (sub[1] * sub[8] - sub[2] * sub[7])
            + sub[6] * (sub[1] * sub[5] - sub[2] * sub[4])
    }

    /// Inverse via the adjugate.
    ///
    /// A singular matrix (determinant exactly zero) yields [`Mat4::ZERO`]
    /// rather than an error; callers must tolerate a zeroed result. This is
    /// a defined outcome, reachable through zero-scale transforms.
    pub fn invert(self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            return Self::ZERO;
        }
        let inv_det = 1.0 / det;
        let mut out = [0.0f32; 16];
        for r in 0..4 {
            for c in 0..4 {
                // Adjugate: transposed cofactors.
                out[c * 4 + r] = self.cofactor(c, r) * inv_det;
            }
        }
        Self(out)
    }

    /// Transpose.
    pub fn transpose(self) -> Self {
        let mut out = [0.0f32; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[r * 4 + c] = self.at(r, c);
            }
        }
        Self(out)
    }

    /// Inverse transpose: the matrix that carries surface normals when the
    /// source transform scales non-uniformly.
    pub fn normal_matrix(self) -> Self {
        self.invert().transpose()
    }

    /// Apply to a point (`w` = 1), without the perspective divide.
    pub fn transform_point(self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.at(0, 0) * p.x + self.at(0, 1) * p.y + self.at(0, 2) * p.z + self.at(0, 3),
            self.at(1, 0) * p.x + self.at(1, 1) * p.y + self.at(1, 2) * p.z + self.at(1, 3),
            self.at(2, 0) * p.x + self.at(2, 1) * p.y + self.at(2, 2) * p.z + self.at(2, 3),
        )
    }

    /// Apply to a direction (`w` = 0); translation does not contribute.
    pub fn transform_vector(self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.at(0, 0) * v.x + self.at(0, 1) * v.y + self.at(0, 2) * v.z,
            self.at(1, 0) * v.x + self.at(1, 1) * v.y + self.at(1, 2) * v.z,
            self.at(2, 0) * v.x + self.at(2, 1) * v.y + self.at(2, 2) * v.z,
        )
    }

    /// Apply to a point with the full perspective divide.
    ///
    /// Returns `None` when the homogeneous `w` vanishes (the point sits on
    /// the projective horizon, for a perspective matrix the camera plane).
    pub fn project_point(self, p: Vec3) -> Option<Vec3> {
        let w = self.at(3, 0) * p.x + self.at(3, 1) * p.y + self.at(3, 2) * p.z + self.at(3, 3);
        if w.abs() < W_EPSILON {
            return None;
        }
        let v = self.transform_point(p);
        Some(Vec3::new(v.x / w, v.y / w, v.z / w))
    }

    /// True when every element is finite.
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0f32; 16];
        for c in 0..4 {
            for r in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.0[k * 4 + r] * rhs.0[c * 4 + k];
                }
                out[c * 4 + r] = acc;
            }
        }
        Self(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/math/mat4.rs"]
mod tests;
