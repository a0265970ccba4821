use std::ops::Mul;

use crate::math::vec2::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A 3x3 matrix of `f32` in column-major order, for the 2D pipeline.
///
/// Element `(row r, column c)` lives at index `c * 3 + r`. Same conventions
/// as [`crate::Mat4`]: column vectors, right multiplication.
pub struct Mat3(pub [f32; 9]);

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ]);

    /// The all-zero matrix, the defined result of inverting a singular matrix.
    pub const ZERO: Self = Self([0.0; 9]);

    /// Translation by `(tx, ty)`.
    pub fn translation(tx: f32, ty: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.0[6] = tx;
        m.0[7] = ty;
        m
    }

    /// Counter-clockwise rotation by `rad` radians.
    pub fn rotation(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        let mut m = Self::IDENTITY;
        m.0[0] = c;
        m.0[1] = s;
        m.0[3] = -s;
        m.0[4] = c;
        m
    }

    /// Per-axis scale by `(sx, sy)`.
    pub fn scale(sx: f32, sy: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.0[0] = sx;
        m.0[4] = sy;
        m
    }

    /// Pixel space to clip space for a `width` x `height` surface.
    ///
    /// Pixel origin is the top-left corner with y growing downward; clip
    /// space puts `(-1, -1)` at the bottom-left, so the y axis flips:
    /// `(0, 0)` maps to `(-1, +1)` and `(width, height)` to `(+1, -1)`.
    pub fn viewport_to_clip(width: f32, height: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.0[0] = 2.0 / width;
        m.0[4] = -2.0 / height;
        m.0[6] = -1.0;
        m.0[7] = 1.0;
        m
    }

    /// Multiply an ordered sequence into one matrix.
    ///
    /// Same contract as [`crate::Mat4::compose`]: first element outermost,
    /// empty slice yields [`Mat3::IDENTITY`].
    pub fn compose(matrices: &[Mat3]) -> Self {
        matrices.iter().fold(Self::IDENTITY, |acc, m| acc * *m)
    }

    // Element at (row, col).
    #[inline]
    fn at(self, row: usize, col: usize) -> f32 {
        self.0[col * 3 + row]
    }

    /// Determinant, by cofactor expansion along the first column.
    pub fn determinant(self) -> f32 {
        (0..3).map(|r| self.at(r, 0) * self.cofactor(r, 0)).sum()
    }

    fn cofactor(self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col)
    }

    // Determinant of the 2x2 submatrix left after removing `row` and `col`.
    fn minor(self, row: usize, col: usize) -> f32 {
        let mut sub = [0.0f32; 4];
        let mut i = 0;
        for c in 0..3 {
            if c == col {
                continue;
            }
            for r in 0..3 {
                if r == row {
                    continue;
                }
                sub[i] = self.at(r, c);
                i += 1;
            }
        }
        sub[0] * sub[3] - sub[2] * sub[1]
    }

    /// Inverse via the adjugate.
    ///
    /// A singular matrix (determinant exactly zero) yields [`Mat3::ZERO`];
    /// callers must tolerate a zeroed result.
    pub fn invert(self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            return Self::ZERO;
        }
        let inv_det = 1.0 / det;
        let mut out = [0.0f32; 9];
        for r in 0..3 {
            for c in 0..3 {
                out[c * 3 + r] = self.cofactor(c, r) * inv_det;
            }
        }
        Self(out)
    }

    /// Transpose.
    pub fn transpose(self) -> Self {
        let mut out = [0.0f32; 9];
        for r in 0..3 {
            for c in 0..3 {
                out[r * 3 + c] = self.at(r, c);
            }
        }
        Self(out)
    }

    /// Apply to a 2D point (`w` = 1).
    ///
    /// Assumes an affine bottom row, which every constructor here produces.
    pub fn transform_point2(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.at(0, 0) * p.x + self.at(0, 1) * p.y + self.at(0, 2),
            self.at(1, 0) * p.x + self.at(1, 1) * p.y + self.at(1, 2),
        )
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0f32; 9];
        for c in 0..3 {
            for r in 0..3 {
                let mut acc = 0.0;
                for k in 0..3 {
                    acc += self.0[k * 3 + r] * rhs.0[c * 3 + k];
                }
                out[c * 3 + r] = acc;
            }
        }
        Self(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/math/mat3.rs"]
mod tests;
