//! Polygon clipping against a rectangular window.
//!
//! The window is treated as the intersection of four half-planes, and the
//! polygon is clipped against each in turn:
//!
//! ```text
//! x >= x_min   (Left)
//! y <= y_max   (Top)
//! x <= x_max   (Right)
//! y >= y_min   (Bottom)
//! ```

use crate::geometry::{ClipWindow, Point};

/// One boundary of the clip window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipEdge {
    Left,
    Top,
    Right,
    Bottom,
}

impl ClipEdge {
    /// The order edges are applied in.
    pub const ORDER: [ClipEdge; 4] = [ClipEdge::Left, ClipEdge::Top, ClipEdge::Right, ClipEdge::Bottom];

    /// Inclusive half-plane test; points on the boundary are inside.
    #[inline]
    pub fn inside(&self, p: Point, window: &ClipWindow) -> bool {
        match self {
            Self::Left => p.x >= window.x_min(),
            Self::Top => p.y <= window.y_max(),
            Self::Right => p.x <= window.x_max(),
            Self::Bottom => p.y >= window.y_min(),
        }
    }

    /// Intersection of the edge `s -> p` with this boundary line.
    ///
    /// Only called when exactly one of `s`, `p` is inside, which keeps the
    /// denominator non-zero. The result lies exactly on the boundary.
    #[inline]
    pub fn intersect(&self, s: Point, p: Point, window: &ClipWindow) -> Point {
        let vertical_at = |x: f64| Point::new(x, s.y + (p.y - s.y) * (x - s.x) / (p.x - s.x));
        let horizontal_at = |y: f64| Point::new(s.x + (p.x - s.x) * (y - s.y) / (p.y - s.y), y);

        match self {
            Self::Left => vertical_at(window.x_min()),
            Self::Right => vertical_at(window.x_max()),
            Self::Top => horizontal_at(window.y_max()),
            Self::Bottom => horizontal_at(window.y_min()),
        }
    }
}

/// Clips a closed polygon against a single window edge.
///
/// Walks every edge `s -> p` including the wrap-around from the last vertex
/// back to the first:
/// - `p` inside, `s` outside: emit the crossing, then `p`
/// - both inside: emit `p`
/// - `p` outside, `s` inside: emit the crossing only
/// - both outside: emit nothing
pub fn clip_polygon_to_edge(polygon: &[Point], edge: ClipEdge, window: &ClipWindow) -> Vec<Point> {
    let Some(&last) = polygon.last() else {
        return Vec::new();
    };

    let mut output = Vec::with_capacity(polygon.len() + 1);
    let mut s = last;

    for &p in polygon {
        let p_inside = edge.inside(p, window);
        let s_inside = edge.inside(s, window);

        if p_inside {
            if !s_inside {
                output.push(edge.intersect(s, p, window));
            }
            output.push(p);
        } else if s_inside {
            output.push(edge.intersect(s, p, window));
        }

        s = p;
    }

    output
}

/// Sutherland-Hodgeman polygon clipper.
///
/// Returns the vertices of `polygon ∩ window`, in the input's winding.
/// Consecutive repeated vertices are merged. Polygons with fewer than 3
/// vertices, and results that collapse below 3 distinct vertices (e.g.
/// touching the window at a single corner), come back empty.
///
/// Concave input is accepted; its clipped result may contain zero-area
/// bridges along the window boundary where separate pieces would be.
pub fn clip_polygon(polygon: &[Point], window: &ClipWindow) -> Vec<Point> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let mut result = polygon.to_vec();
    for edge in ClipEdge::ORDER {
        result = clip_polygon_to_edge(&result, edge, window);
        if result.is_empty() {
            break;
        }
    }

    result.dedup();
    while result.len() > 1 && result.first() == result.last() {
        result.pop();
    }

    if result.len() < 3 {
        return Vec::new();
    }
    result
}
