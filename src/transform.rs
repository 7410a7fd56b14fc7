//! 2D affine transforms in homogeneous coordinates.
//!
//! Provides a [`Transform2D`] struct with a fluent API that accumulates
//! translation, rotation, scaling, reflection and shearing into a single
//! [`Mat3`], plus the composite presets used by the transformation demos.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::math::mat3::Mat3;

/// An accumulated 2D affine transform.
///
/// Operations apply in call order: each new operation acts on the result of
/// the ones before it. Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// let mut t = Transform2D::new();
/// t.translate(2.0, 1.0).rotate_degrees(30.0).scale(1.2, 0.8);
/// let moved = t.apply(&shape);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform2D {
    matrix: Mat3,
}

impl Transform2D {
    /// Create the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matrix(matrix: Mat3) -> Self {
        Self { matrix }
    }

    /// Appends an arbitrary matrix after the current operations.
    pub fn then(&mut self, m: Mat3) -> &mut Self {
        self.matrix = m * self.matrix;
        self
    }

    pub fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.then(Mat3::translation(tx, ty))
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotate_degrees(&mut self, degrees: f64) -> &mut Self {
        self.then(Mat3::rotation_degrees(degrees))
    }

    pub fn rotate_about(&mut self, pivot: Point, degrees: f64) -> &mut Self {
        self.then(Mat3::about(pivot, Mat3::rotation_degrees(degrees)))
    }

    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.then(Mat3::scaling(sx, sy))
    }

    pub fn scale_about(&mut self, pivot: Point, sx: f64, sy: f64) -> &mut Self {
        self.then(Mat3::about(pivot, Mat3::scaling(sx, sy)))
    }

    /// Mirror across the x-axis.
    pub fn reflect_x(&mut self) -> &mut Self {
        self.then(Mat3::reflection_x())
    }

    /// Mirror across the y-axis.
    pub fn reflect_y(&mut self) -> &mut Self {
        self.then(Mat3::reflection_y())
    }

    pub fn reflect_origin(&mut self) -> &mut Self {
        self.then(Mat3::reflection_origin())
    }

    /// Mirror across the horizontal line `y = height / 2`, i.e. `y -> height - y`.
    pub fn flip_vertical(&mut self, height: f64) -> &mut Self {
        self.then(Mat3::translation(0.0, height) * Mat3::reflection_x())
    }

    pub fn shear_x(&mut self, shx: f64) -> &mut Self {
        self.then(Mat3::shearing_x(shx))
    }

    pub fn shear_y(&mut self, shy: f64) -> &mut Self {
        self.then(Mat3::shearing_y(shy))
    }

    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    pub fn apply_point(&self, p: Point) -> Point {
        self.matrix * p
    }

    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.matrix * p).collect()
    }

    /// The transform that undoes this one, if it is not singular.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.inverse().map(Self::from_matrix)
    }
}

/// Multiplies matrices left to right: `composite(&[a, b, c]) == a * b * c`.
///
/// With column vectors this applies `c` first.
pub fn composite(matrices: &[Mat3]) -> Mat3 {
    matrices
        .iter()
        .fold(Mat3::identity(), |acc, &m| acc * m)
}

/// Parameters for the composite transformation presets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub tx: f64,
    pub ty: f64,
    /// Rotation angle in degrees, counter-clockwise.
    pub angle: f64,
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    /// Center for rotation and scaling.
    pub pivot: Point,
    /// Height of the viewport that reflections flip within.
    pub reflect_height: f64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            tx: 50.0,
            ty: 30.0,
            angle: 30.0,
            sx: 1.2,
            sy: 0.8,
            shx: 0.2,
            pivot: Point::new(400.0, 300.0),
            reflect_height: 600.0,
        }
    }
}

/// Composite transformation presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeMode {
    #[default]
    TranslateRotate,
    ScaleReflect,
    RotateShear,
    TranslateScaleRotate,
    All,
}

impl CompositeMode {
    pub const ALL: [CompositeMode; 5] = [
        CompositeMode::TranslateRotate,
        CompositeMode::ScaleReflect,
        CompositeMode::RotateShear,
        CompositeMode::TranslateScaleRotate,
        CompositeMode::All,
    ];

    /// Short name used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            CompositeMode::TranslateRotate => "translate-rotate",
            CompositeMode::ScaleReflect => "scale-reflect",
            CompositeMode::RotateShear => "rotate-shear",
            CompositeMode::TranslateScaleRotate => "translate-scale-rotate",
            CompositeMode::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompositeMode::TranslateRotate => "Translation + Rotation",
            CompositeMode::ScaleReflect => "Scaling + Reflection",
            CompositeMode::RotateShear => "Rotation + Shearing",
            CompositeMode::TranslateScaleRotate => "Translation + Scaling + Rotation",
            CompositeMode::All => "All Transformations",
        }
    }

    /// Builds the transform for this preset.
    pub fn transform(&self, params: &TransformParams) -> Transform2D {
        let p = params;
        let mut t = Transform2D::new();
        match self {
            CompositeMode::TranslateRotate => {
                t.translate(p.tx, p.ty).rotate_about(p.pivot, p.angle);
            }
            CompositeMode::ScaleReflect => {
                t.scale_about(p.pivot, p.sx, p.sy)
                    .flip_vertical(p.reflect_height);
            }
            CompositeMode::RotateShear => {
                t.rotate_about(p.pivot, p.angle).shear_x(p.shx);
            }
            CompositeMode::TranslateScaleRotate => {
                t.translate(p.tx, p.ty)
                    .scale_about(p.pivot, p.sx, p.sy)
                    .rotate_about(p.pivot, p.angle);
            }
            CompositeMode::All => {
                t.translate(p.tx, p.ty)
                    .rotate_about(p.pivot, p.angle)
                    .scale_about(p.pivot, p.sx, p.sy)
                    .shear_x(p.shx)
                    .flip_vertical(p.reflect_height);
            }
        }
        t
    }
}

impl std::fmt::Display for CompositeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rectangle;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_is_identity() {
        let t = Transform2D::default();
        assert_eq!(t.matrix(), Mat3::identity());
    }

    #[test]
    fn test_fluent_order() {
        // Translate then rotate about the origin: (1,0) -> (3,0) -> (0,3)
        let mut t = Transform2D::new();
        t.translate(2.0, 0.0).rotate_degrees(90.0);
        assert_abs_diff_eq!(t.apply_point(Point::new(1.0, 0.0)), Point::new(0.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_matches_composite() {
        let mut t = Transform2D::new();
        t.scale(2.0, 3.0).shear_x(0.5).translate(1.0, 1.0);
        let m = composite(&[
            Mat3::translation(1.0, 1.0),
            Mat3::shearing_x(0.5),
            Mat3::scaling(2.0, 3.0),
        ]);
        assert_abs_diff_eq!(t.matrix(), m, epsilon = 1e-12);
    }

    #[test]
    fn test_reflections() {
        let p = Point::new(3.0, 4.0);
        let mut t = Transform2D::new();
        t.reflect_x();
        assert_eq!(t.apply_point(p), Point::new(3.0, -4.0));

        let mut t = Transform2D::new();
        t.reflect_y();
        assert_eq!(t.apply_point(p), Point::new(-3.0, 4.0));

        let mut t = Transform2D::new();
        t.reflect_origin();
        assert_eq!(t.apply_point(p), Point::new(-3.0, -4.0));

        let mut t = Transform2D::new();
        t.flip_vertical(600.0);
        assert_eq!(t.apply_point(p), Point::new(3.0, 596.0));
    }

    #[test]
    fn test_rotate_about_pivot() {
        let pivot = Point::new(400.0, 300.0);
        let mut t = Transform2D::new();
        t.rotate_about(pivot, 90.0);
        assert_abs_diff_eq!(t.apply_point(Point::new(500.0, 300.0)), Point::new(400.0, 400.0), epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_restores_shape() {
        let shape = rectangle(300.0, 150.0, 50.0, 50.0);
        let t = CompositeMode::All.transform(&TransformParams::default());
        let back = t.inverse().unwrap().apply(&t.apply(&shape));
        for (a, b) in shape.iter().zip(&back) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_translate_rotate_preset() {
        let params = TransformParams::default();
        let t = CompositeMode::TranslateRotate.transform(&params);
        // The pivot minus the translation lands back on the pivot before rotating
        let start = Point::new(params.pivot.x - params.tx, params.pivot.y - params.ty);
        assert_abs_diff_eq!(t.apply_point(start), params.pivot, epsilon = 1e-9);
    }

    #[test]
    fn test_presets_preserve_vertex_count() {
        let shape = rectangle(300.0, 150.0, 50.0, 50.0);
        for mode in CompositeMode::ALL {
            assert_eq!(mode.transform(&TransformParams::default()).apply(&shape).len(), 4);
        }
    }
}
