//! 3x3 homogeneous transformation matrix for 2D affine transforms.
//!
//! # Convention
//! - Points are **column vectors** on the right: `Mat3 * Vec2` (with w = 1)
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * p` applies B first, then A
//!
//! # Example
//! ```ignore
//! let m = Mat3::translation(10.0, 0.0) * Mat3::rotation_degrees(90.0);
//! let p = m * Vec2::new(1.0, 0.0); // rotate, then translate
//! ```

use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use super::vec2::Vec2;

/// 3x3 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [[f64; 3]; 3],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    pub const fn new(data: [[f64; 3]; 3]) -> Self {
        Mat3 { data }
    }

    pub const fn identity() -> Self {
        Mat3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Mat3::new([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotation(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Mat3::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn rotation_degrees(degrees: f64) -> Self {
        Self::rotation(degrees.to_radians())
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Mat3::new([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Reflection across the x-axis: (x, y) -> (x, -y).
    pub fn reflection_x() -> Self {
        Self::scaling(1.0, -1.0)
    }

    /// Reflection across the y-axis: (x, y) -> (-x, y).
    pub fn reflection_y() -> Self {
        Self::scaling(-1.0, 1.0)
    }

    /// Reflection through the origin: (x, y) -> (-x, -y).
    pub fn reflection_origin() -> Self {
        Self::scaling(-1.0, -1.0)
    }

    /// Shear along x: x' = x + shx * y.
    pub fn shearing_x(shx: f64) -> Self {
        Mat3::new([[1.0, shx, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Shear along y: y' = y + shy * x.
    pub fn shearing_y(shy: f64) -> Self {
        Mat3::new([[1.0, 0.0, 0.0], [shy, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Conjugates `m` so that it acts around `pivot` instead of the origin.
    pub fn about(pivot: Vec2, m: Mat3) -> Self {
        Self::translation(pivot.x, pivot.y) * m * Self::translation(-pivot.x, -pivot.y)
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the inverse, or `None` when the matrix is singular
    /// (e.g. a zero scale factor).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let m = &self.data;

        // Cofactors, transposed into the adjugate
        let c00 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
        let c01 = -(m[1][0] * m[2][2] - m[1][2] * m[2][0]);
        let c02 = m[1][0] * m[2][1] - m[1][1] * m[2][0];
        let c10 = -(m[0][1] * m[2][2] - m[0][2] * m[2][1]);
        let c11 = m[0][0] * m[2][2] - m[0][2] * m[2][0];
        let c12 = -(m[0][0] * m[2][1] - m[0][1] * m[2][0]);
        let c20 = m[0][1] * m[1][2] - m[0][2] * m[1][1];
        let c21 = -(m[0][0] * m[1][2] - m[0][2] * m[1][0]);
        let c22 = m[0][0] * m[1][1] - m[0][1] * m[1][0];

        Some(Mat3::new([
            [c00 * inv_det, c10 * inv_det, c20 * inv_det],
            [c01 * inv_det, c11 * inv_det, c21 * inv_det],
            [c02 * inv_det, c12 * inv_det, c22 * inv_det],
        ]))
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }
}

/// For column-vector convention, `A * B * p` applies B first, then A.
impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        let mut result = [[0.0f64; 3]; 3];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col];
            }
        }

        Mat3::new(result)
    }
}

/// Transform a point (w = 1). Affine matrices keep w at 1, so no divide.
impl Mul<Vec2> for Mat3 {
    type Output = Vec2;

    fn mul(self, p: Vec2) -> Self::Output {
        Vec2::new(
            self.data[0][0] * p.x + self.data[0][1] * p.y + self.data[0][2],
            self.data[1][0] * p.x + self.data[1][1] * p.y + self.data[1][2],
        )
    }
}

impl AbsDiffEq for Mat3 {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| f64::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for Mat3 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| f64::relative_eq(a, b, epsilon, max_relative))
    }
}
