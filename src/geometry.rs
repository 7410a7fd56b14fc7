//! Value types shared by the rasterizers and clippers.
//!
//! Everything here is a plain immutable value; no type carries identity
//! beyond its coordinates.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::vec2::Vec2;

/// Continuous 2D point. Used for real-valued geometry in and out.
pub type Point = Vec2;

/// Discrete pixel coordinate produced by the integer rasterizers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates a point toward zero, the way integer line endpoints are taken.
    pub fn truncate(p: Point) -> Self {
        Self::new(p.x as i32, p.y as i32)
    }

    /// Rounds a point to the nearest pixel.
    pub fn round(p: Point) -> Self {
        Self::new(p.x.round() as i32, p.y.round() as i32)
    }

    /// Chebyshev distance: the number of 8-connected steps between pixels.
    pub fn chebyshev(&self, other: Pixel) -> u32 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        // At most u32::MAX for any two i32 coordinates
        dx.max(dy) as u32
    }
}

impl From<Pixel> for Point {
    fn from(p: Pixel) -> Self {
        Point::new(p.x as f64, p.y as f64)
    }
}

/// Ordered pair of points. Clipping parametrizes from `p1` toward `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn delta(&self) -> Vec2 {
        self.p2 - self.p1
    }

    /// Point at parameter `t` along `p1 -> p2`.
    pub fn at(&self, t: f64) -> Point {
        self.p1.lerp(self.p2, t)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }
}

impl AbsDiffEq for Segment {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.p1.abs_diff_eq(&other.p1, epsilon) && self.p2.abs_diff_eq(&other.p2, epsilon)
    }
}

/// Closed polygon outline, last vertex implicitly joined to the first.
pub type Polygon = Vec<Point>;

/// Axis-aligned rectangle polygon, counter-clockwise from `(x, y)`.
pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Polygon {
    vec![
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}

pub fn triangle(a: Point, b: Point, c: Point) -> Polygon {
    vec![a, b, c]
}

/// Axis-aligned clip rectangle.
///
/// The invariant `x_min < x_max && y_min < y_max` is enforced by [`ClipWindow::new`],
/// so the clippers never have to discover a bad window mid-algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WindowBounds", into = "WindowBounds")]
pub struct ClipWindow {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

/// Unvalidated window bounds as they appear in configuration files.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl TryFrom<WindowBounds> for ClipWindow {
    type Error = Error;

    fn try_from(b: WindowBounds) -> Result<Self> {
        ClipWindow::new(b.x_min, b.y_min, b.x_max, b.y_max)
    }
}

impl From<ClipWindow> for WindowBounds {
    fn from(w: ClipWindow) -> Self {
        WindowBounds {
            x_min: w.x_min,
            y_min: w.y_min,
            x_max: w.x_max,
            y_max: w.y_max,
        }
    }
}

impl Default for ClipWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ClipWindow {
    /// The window used throughout the clipping demos.
    pub const DEFAULT: ClipWindow = ClipWindow {
        x_min: 100.0,
        y_min: 100.0,
        x_max: 500.0,
        y_max: 400.0,
    };

    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        let finite = [x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite());
        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(Error::InvalidWindow {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Inclusive containment test; boundary points count as inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Corners in counter-clockwise order starting at (x_min, y_min).
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_min, self.y_max),
        ]
    }
}
