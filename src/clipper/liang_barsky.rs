use log::debug;

use super::SegmentClipper;
use crate::geometry::{ClipWindow, Point, Segment};

/// Window boundary in the order the parametric tests visit them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Boundary {
    Left,
    Right,
    Bottom,
    Top,
}

impl Boundary {
    const ALL: [Boundary; 4] = [Boundary::Left, Boundary::Right, Boundary::Bottom, Boundary::Top];

    /// Places `p` exactly on this boundary line.
    fn snap(self, p: Point, window: &ClipWindow) -> Point {
        match self {
            Boundary::Left => Point::new(window.x_min(), p.y),
            Boundary::Right => Point::new(window.x_max(), p.y),
            Boundary::Bottom => Point::new(p.x, window.y_min()),
            Boundary::Top => Point::new(p.x, window.y_max()),
        }
    }
}

/// Parameter interval of a segment inside a window, with the boundary that
/// set each end (`None` means the end is the original endpoint).
#[derive(Clone, Copy, Debug)]
struct Interval {
    t_enter: f64,
    t_exit: f64,
    enter_boundary: Option<Boundary>,
    exit_boundary: Option<Boundary>,
}

fn interval(segment: &Segment, window: &ClipWindow) -> Option<Interval> {
    let Segment { p1, .. } = *segment;
    let d = segment.delta();

    // x = x1 + t·dx, y = y1 + t·dy; p is the direction, q the distance to each boundary
    let p = [-d.x, d.x, -d.y, d.y];
    let q = [
        p1.x - window.x_min(),
        window.x_max() - p1.x,
        p1.y - window.y_min(),
        window.y_max() - p1.y,
    ];

    let mut iv = Interval {
        t_enter: 0.0,
        t_exit: 1.0,
        enter_boundary: None,
        exit_boundary: None,
    };

    for ((&p_i, &q_i), boundary) in p.iter().zip(q.iter()).zip(Boundary::ALL) {
        if p_i == 0.0 {
            // Parallel to this boundary: either wholly outside it or irrelevant
            if q_i < 0.0 {
                debug!("liang-barsky: parallel to {:?} and outside", boundary);
                return None;
            }
            continue;
        }

        let t = q_i / p_i;
        if p_i < 0.0 {
            if t > iv.t_enter {
                iv.t_enter = t;
                iv.enter_boundary = Some(boundary);
            }
        } else if t < iv.t_exit {
            iv.t_exit = t;
            iv.exit_boundary = Some(boundary);
        }
    }

    if iv.t_enter > iv.t_exit {
        return None;
    }
    Some(iv)
}

/// Returns `(t_enter, t_exit)` for the visible part of `segment`, or `None`
/// when nothing of it lies inside `window`.
pub fn clip_parameters(segment: &Segment, window: &ClipWindow) -> Option<(f64, f64)> {
    interval(segment, window).map(|iv| (iv.t_enter, iv.t_exit))
}

/// Parametric line clipper.
///
/// Intersects the parameter range `[0, 1]` of `p1 + t·(p2 - p1)` with the
/// four half-planes of the window in a single pass. A direction component of
/// zero is handled before any division. Clipped endpoints are placed exactly
/// on the boundary that produced them.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiangBarsky;

impl LiangBarsky {
    pub fn new() -> Self {
        LiangBarsky
    }
}

impl SegmentClipper for LiangBarsky {
    fn clip(&self, segment: Segment, window: &ClipWindow) -> Option<Segment> {
        let iv = interval(&segment, window)?;

        let p1 = match iv.enter_boundary {
            Some(boundary) => boundary.snap(segment.at(iv.t_enter), window),
            None => segment.p1,
        };
        let p2 = match iv.exit_boundary {
            Some(boundary) => boundary.snap(segment.at(iv.t_exit), window),
            None => segment.p2,
        };

        Some(Segment::new(p1, p2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn window() -> ClipWindow {
        ClipWindow::new(100.0, 100.0, 500.0, 400.0).unwrap()
    }

    fn clip(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Segment> {
        LiangBarsky::new().clip(Segment::from_coords(x1, y1, x2, y2), &window())
    }

    #[test]
    fn test_inside_unchanged() {
        let s = clip(200.0, 200.0, 300.0, 300.0).unwrap();
        assert_eq!(s, Segment::from_coords(200.0, 200.0, 300.0, 300.0));
    }

    #[test]
    fn test_outside_rejected() {
        assert!(clip(600.0, 500.0, 700.0, 600.0).is_none());
    }

    #[test]
    fn test_crosses_left_and_right() {
        let s = clip(50.0, 150.0, 550.0, 350.0).unwrap();
        assert_eq!(s.p1.x, 100.0);
        assert_eq!(s.p2.x, 500.0);
        assert_relative_eq!(s.p1.y, 170.0);
        assert_relative_eq!(s.p2.y, 330.0);
    }

    #[test]
    fn test_parameters() {
        let (t0, t1) =
            clip_parameters(&Segment::from_coords(50.0, 150.0, 550.0, 350.0), &window()).unwrap();
        assert_relative_eq!(t0, 0.1);
        assert_relative_eq!(t1, 0.9);
    }

    #[test]
    fn test_parallel_outside_rejected_without_division() {
        // Vertical, left of the window
        assert!(clip(50.0, 0.0, 50.0, 500.0).is_none());
        // Horizontal, below the window
        assert!(clip(0.0, 50.0, 600.0, 50.0).is_none());
    }

    #[test]
    fn test_parallel_on_boundary_accepted() {
        let s = clip(0.0, 400.0, 600.0, 400.0).unwrap();
        assert_eq!(s, Segment::from_coords(100.0, 400.0, 500.0, 400.0));
    }

    #[test]
    fn test_corner_touch_is_a_point() {
        let s = clip(0.0, 200.0, 200.0, 0.0).unwrap();
        assert_relative_eq!(s.p1.x, 100.0);
        assert_relative_eq!(s.p1.y, 100.0);
        assert_relative_eq!(s.p2.x, 100.0);
        assert_relative_eq!(s.p2.y, 100.0);
    }

    #[test]
    fn test_degenerate_point() {
        assert!(clip(300.0, 300.0, 300.0, 300.0).is_some());
        assert!(clip(50.0, 300.0, 50.0, 300.0).is_none());
    }

    #[test]
    fn test_reversed_direction() {
        let s = clip(550.0, 350.0, 50.0, 150.0).unwrap();
        assert_eq!(s.p1.x, 500.0);
        assert_eq!(s.p2.x, 100.0);
    }
}
