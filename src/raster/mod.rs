//! Scan conversion of lines, circles and ellipses.
//!
//! Available algorithms:
//! - [`BresenhamLine`]: integer-only line stepping, exact and symmetric
//! - [`DdaLine`]: floating-point increments, accepts real endpoints
//! - [`rasterize_circle`]: midpoint circle, 8-way symmetry
//! - [`rasterize_ellipse`]: two-region midpoint ellipse, 4-way symmetry

mod circle;
mod ellipse;
mod line;

pub use circle::rasterize_circle;
pub use ellipse::rasterize_ellipse;
pub use line::{BresenhamLine, DdaLine};

use crate::geometry::Point;

/// Available line rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAlgorithm {
    /// Integer error-term stepping. Endpoints are truncated to pixels first.
    #[default]
    Bresenham,
    /// Uniform real increments along the major axis.
    Dda,
}

impl std::fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineAlgorithm::Bresenham => write!(f, "Bresenham"),
            LineAlgorithm::Dda => write!(f, "DDA"),
        }
    }
}

/// Points of a rasterized line, whichever algorithm produced them.
#[derive(Clone, Debug)]
pub enum LinePoints {
    Bresenham(BresenhamLine),
    Dda(DdaLine),
}

impl Iterator for LinePoints {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            LinePoints::Bresenham(line) => line.next().map(Point::from),
            LinePoints::Dda(line) => line.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            LinePoints::Bresenham(line) => line.size_hint(),
            LinePoints::Dda(line) => line.size_hint(),
        }
    }
}

impl ExactSizeIterator for LinePoints {}

/// Rasterizes the segment `p1 -> p2` with the chosen algorithm.
///
/// Bresenham truncates real endpoints to pixels while DDA starts from them
/// exactly and is rounded when plotted. The two therefore share their first
/// and last pixel only when both endpoints have integer coordinates.
pub fn rasterize_line(p1: Point, p2: Point, algorithm: LineAlgorithm) -> LinePoints {
    match algorithm {
        LineAlgorithm::Bresenham => LinePoints::Bresenham(BresenhamLine::from_points(p1, p2)),
        LineAlgorithm::Dda => LinePoints::Dda(DdaLine::new(p1, p2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Pixel;

    #[test]
    fn test_dispatch_endpoints_agree() {
        let p1 = Point::new(10.0, 20.0);
        let p2 = Point::new(-35.0, 61.0);
        let bres: Vec<_> = rasterize_line(p1, p2, LineAlgorithm::Bresenham).collect();
        let dda: Vec<_> = rasterize_line(p1, p2, LineAlgorithm::Dda).collect();

        assert_eq!(bres.len(), dda.len());
        assert_eq!(Pixel::round(bres[0]), Pixel::round(dda[0]));
        assert_eq!(
            Pixel::round(*bres.last().unwrap()),
            Pixel::round(*dda.last().unwrap())
        );
    }

    #[test]
    fn test_bresenham_truncates_real_endpoints() {
        let points: Vec<_> =
            rasterize_line(Point::new(0.9, 0.2), Point::new(3.7, 0.0), LineAlgorithm::Bresenham)
                .collect();
        assert_eq!(points.first(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(points.last(), Some(&Point::new(3.0, 0.0)));
    }

    #[test]
    fn test_real_endpoints_differ_between_algorithms() {
        let p1 = Point::new(0.9, 0.2);
        let p2 = Point::new(3.7, 0.0);
        let bres: Vec<_> = rasterize_line(p1, p2, LineAlgorithm::Bresenham).collect();
        let dda: Vec<_> = rasterize_line(p1, p2, LineAlgorithm::Dda).collect();

        assert_eq!(Pixel::round(bres[0]), Pixel::new(0, 0));
        assert_eq!(dda[0], p1);
        assert_eq!(Pixel::round(dda[0]), Pixel::new(1, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(LineAlgorithm::Dda.to_string(), "DDA");
        assert_eq!(LineAlgorithm::default(), LineAlgorithm::Bresenham);
    }
}
