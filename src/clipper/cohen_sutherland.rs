use std::ops::{BitAnd, BitOr, BitOrAssign};

use log::{debug, warn};

use super::SegmentClipper;
use crate::geometry::{ClipWindow, Point, Segment};

/// Which sides of a clip window a point lies outside of.
///
/// ```text
///        |        |
///  1001  |  1000  | 1010
///        |        |
/// -------+--------+-------- y_max
///        |        |
///  0001  |  0000  | 0010
///        |        |
/// -------+--------+-------- y_min
///        |        |
///  0101  |  0100  | 0110
///        |        |
///      x_min    x_max
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegionCode(u8);

impl RegionCode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    /// Classifies `p` against `window`. Boundary points are inside.
    pub fn of(p: Point, window: &ClipWindow) -> Self {
        let mut code = Self::INSIDE;

        if p.x < window.x_min() {
            code |= Self::LEFT;
        } else if p.x > window.x_max() {
            code |= Self::RIGHT;
        }

        if p.y < window.y_min() {
            code |= Self::BOTTOM;
        } else if p.y > window.y_max() {
            code |= Self::TOP;
        }

        code
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_inside(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl BitOr for RegionCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RegionCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for RegionCode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

/// Each endpoint crosses at most one x boundary and one y boundary, so exact
/// arithmetic finishes within four clips. The extra slack absorbs rounding at
/// window corners.
const MAX_CLIPS: usize = 8;

/// Region-code line clipper.
///
/// Loops on the endpoint codes: accept when both are inside, reject when they
/// share an outside bit, otherwise move an outside endpoint onto the first
/// boundary its code names (priority top, bottom, right, left).
///
/// Division safety: a TOP or BOTTOM bit set on one endpoint and clear on the
/// other means the endpoints sit on opposite sides of that horizontal line, so
/// `y2 != y1`; if both had the bit the trivial reject would already have fired.
/// The same holds for LEFT/RIGHT and `x2 - x1`. The zero check below is kept
/// as a guard and is not reached for finite input.
#[derive(Clone, Copy, Debug, Default)]
pub struct CohenSutherland;

impl CohenSutherland {
    pub fn new() -> Self {
        CohenSutherland
    }

    /// Moves the endpoint with code `code_out` onto the boundary its code names.
    fn intersect(p1: Point, p2: Point, code_out: RegionCode, window: &ClipWindow) -> Option<Point> {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;

        let (boundary_is_horizontal, boundary) = if code_out.contains(RegionCode::TOP) {
            (true, window.y_max())
        } else if code_out.contains(RegionCode::BOTTOM) {
            (true, window.y_min())
        } else if code_out.contains(RegionCode::RIGHT) {
            (false, window.x_max())
        } else {
            (false, window.x_min())
        };

        if boundary_is_horizontal {
            if dy == 0.0 {
                debug!("cohen-sutherland: horizontal segment reached a y boundary");
                return None;
            }
            Some(Point::new(p1.x + dx * (boundary - p1.y) / dy, boundary))
        } else {
            if dx == 0.0 {
                debug!("cohen-sutherland: vertical segment reached an x boundary");
                return None;
            }
            Some(Point::new(boundary, p1.y + dy * (boundary - p1.x) / dx))
        }
    }
}

impl SegmentClipper for CohenSutherland {
    fn clip(&self, segment: Segment, window: &ClipWindow) -> Option<Segment> {
        let Segment { mut p1, mut p2 } = segment;
        let mut code1 = RegionCode::of(p1, window);
        let mut code2 = RegionCode::of(p2, window);

        for _ in 0..=MAX_CLIPS {
            if code1.is_inside() && code2.is_inside() {
                return Some(Segment::new(p1, p2));
            }
            if !(code1 & code2).is_inside() {
                // Both endpoints share an outside region
                return None;
            }

            let code_out = if !code1.is_inside() { code1 } else { code2 };
            let clipped = Self::intersect(p1, p2, code_out, window)?;

            if code_out == code1 {
                p1 = clipped;
                code1 = RegionCode::of(p1, window);
            } else {
                p2 = clipped;
                code2 = RegionCode::of(p2, window);
            }
        }

        warn!(
            "cohen-sutherland: no decision after {} clips for {:?}",
            MAX_CLIPS, segment
        );
        None
    }
}
