//! Edge-function triangle coverage.
//!
//! For an edge from A to B, the edge function at P is the 2D cross product
//! `(B - A) x (P - A)`:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! A pixel is covered when its center gives the same sign for all three
//! edges, so either winding order fills.

use crate::geometry::{Pixel, Point};

#[inline]
pub fn edge_function(a: Point, b: Point, p: Point) -> f64 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Calls `plot` for every pixel whose center lies inside the triangle
/// `v0 v1 v2`, restricted to `0..width` by `0..height`.
///
/// Pixel `(x, y)` covers the unit square starting at `(x, y)`. Centers on an
/// edge count as inside. Degenerate triangles cover nothing.
pub fn fill_triangle<F>(v0: Point, v1: Point, v2: Point, width: u32, height: u32, mut plot: F)
where
    F: FnMut(Pixel),
{
    let area = edge_function(v0, v1, v2);
    if area.abs() < f64::EPSILON || !area.is_finite() {
        return;
    }

    let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i64).max(0);
    let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i64).min(width as i64 - 1);
    let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i64).max(0);
    let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i64).min(height as i64 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let w0 = edge_function(v1, v2, p);
            let w1 = edge_function(v2, v0, p);
            let w2 = edge_function(v0, v1, p);

            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if inside {
                plot(Pixel::new(x as i32, y as i32));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered(v0: Point, v1: Point, v2: Point) -> Vec<Pixel> {
        let mut pixels = Vec::new();
        fill_triangle(v0, v1, v2, 100, 100, |p| pixels.push(p));
        pixels
    }

    #[test]
    fn test_edge_function_sign() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        // Left of a left-to-right edge is negative
        assert!(edge_function(a, b, Point::new(5.0, 5.0)) < 0.0);
        assert!(edge_function(a, b, Point::new(5.0, -5.0)) > 0.0);
        assert_eq!(edge_function(a, b, Point::new(3.0, 0.0)), 0.0);
    }

    #[test]
    fn test_right_triangle_area() {
        let pixels = covered(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        // Centers with x + y <= 9 after the half-pixel offset: 10 + 9 + ... + 1
        assert_eq!(pixels.len(), 55);
        assert!(pixels.contains(&Pixel::new(0, 0)));
        assert!(!pixels.contains(&Pixel::new(9, 9)));
    }

    #[test]
    fn test_winding_independent() {
        let ccw = covered(Point::new(2.0, 2.0), Point::new(40.0, 5.0), Point::new(20.0, 30.0));
        let cw = covered(Point::new(2.0, 2.0), Point::new(20.0, 30.0), Point::new(40.0, 5.0));
        assert_eq!(ccw, cw);
        assert!(!ccw.is_empty());
    }

    #[test]
    fn test_degenerate_and_offscreen() {
        assert!(covered(Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 10.0)).is_empty());
        assert!(covered(Point::new(-50.0, -50.0), Point::new(-10.0, -50.0), Point::new(-30.0, -10.0)).is_empty());
    }
}
