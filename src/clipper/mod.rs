//! Line and polygon clipping against an axis-aligned window.
//!
//! Two segment clippers are available and must agree on every input:
//!
//! - [`CohenSutherland`]: region codes with trivial accept/reject, iterating
//!   until both endpoints are inside or share an outside region.
//! - [`LiangBarsky`]: a single parametric pass over the four boundaries.
//!   Preferred when exact tangency matters.
//!
//! Polygons are clipped with [`clip_polygon`] (Sutherland-Hodgeman).

mod cohen_sutherland;
mod liang_barsky;
mod sutherland_hodgeman;

pub use cohen_sutherland::{CohenSutherland, RegionCode};
pub use liang_barsky::{clip_parameters, LiangBarsky};
pub use sutherland_hodgeman::{clip_polygon, clip_polygon_to_edge, ClipEdge};

use crate::geometry::{ClipWindow, Segment};

/// Trait for segment clipping algorithms.
///
/// Implementors return the visible part of `segment`, keeping its direction,
/// or `None` when no part of it lies inside `window`.
pub trait SegmentClipper {
    fn clip(&self, segment: Segment, window: &ClipWindow) -> Option<Segment>;
}

/// Available segment clipping algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipAlgorithm {
    CohenSutherland,
    /// Single-pass parametric clipping.
    #[default]
    LiangBarsky,
}

impl std::fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipAlgorithm::CohenSutherland => write!(f, "Cohen-Sutherland"),
            ClipAlgorithm::LiangBarsky => write!(f, "Liang-Barsky"),
        }
    }
}

impl SegmentClipper for ClipAlgorithm {
    #[inline]
    fn clip(&self, segment: Segment, window: &ClipWindow) -> Option<Segment> {
        match self {
            ClipAlgorithm::CohenSutherland => CohenSutherland.clip(segment, window),
            ClipAlgorithm::LiangBarsky => LiangBarsky.clip(segment, window),
        }
    }
}

/// Clips `segment` to `window` with the chosen algorithm.
pub fn clip_segment(
    segment: Segment,
    window: &ClipWindow,
    algorithm: ClipAlgorithm,
) -> Option<Segment> {
    algorithm.clip(segment, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALGORITHMS: [ClipAlgorithm; 2] = [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky];

    fn window() -> ClipWindow {
        ClipWindow::new(100.0, 100.0, 500.0, 400.0).unwrap()
    }

    /// The five demo segments from the clipping exercises.
    fn demo_segments() -> Vec<Segment> {
        vec![
            Segment::from_coords(50.0, 150.0, 550.0, 350.0),
            Segment::from_coords(150.0, 50.0, 350.0, 450.0),
            Segment::from_coords(50.0, 50.0, 550.0, 450.0),
            Segment::from_coords(200.0, 200.0, 300.0, 300.0),
            Segment::from_coords(600.0, 500.0, 700.0, 600.0),
        ]
    }

    #[test]
    fn test_algorithms_agree_on_demo_segments() {
        for s in demo_segments() {
            let cs = clip_segment(s, &window(), ClipAlgorithm::CohenSutherland);
            let lb = clip_segment(s, &window(), ClipAlgorithm::LiangBarsky);
            match (cs, lb) {
                (Some(a), Some(b)) => assert_abs_diff_eq!(a, b, epsilon = 1e-9),
                (None, None) => {}
                _ => panic!("clippers disagree on {:?}: {:?} vs {:?}", s, cs, lb),
            }
        }
    }

    #[test]
    fn test_clipping_is_idempotent() {
        for algorithm in ALGORITHMS {
            for s in demo_segments() {
                if let Some(once) = clip_segment(s, &window(), algorithm) {
                    let twice = clip_segment(once, &window(), algorithm).unwrap();
                    assert_abs_diff_eq!(once, twice, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_direction_preserved() {
        for algorithm in ALGORITHMS {
            let s = Segment::from_coords(550.0, 350.0, 50.0, 150.0);
            let clipped = clip_segment(s, &window(), algorithm).unwrap();
            assert!(clipped.p1.x > clipped.p2.x, "{} flipped the segment", algorithm);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ClipAlgorithm::CohenSutherland.to_string(), "Cohen-Sutherland");
    }
}
