//! Two-region midpoint ellipse rasterizer.

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::Point;

#[inline]
fn push_quadrants(out: &mut Vec<Point>, center: Point, x: f64, y: f64) {
    out.extend_from_slice(&[
        Point::new(center.x + x, center.y + y),
        Point::new(center.x - x, center.y + y),
        Point::new(center.x + x, center.y - y),
        Point::new(center.x - x, center.y - y),
    ]);
}

fn check_radius(r: f64) -> Result<()> {
    if r.is_finite() && r >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRadius(r))
    }
}

/// Rasterizes an axis-aligned ellipse with the midpoint algorithm.
///
/// Region 1 starts at `(0, ry)` and steps x while the curve's slope is
/// shallower than -1, i.e. while `2·ry²·x < 2·rx²·y`. Region 2 continues from
/// the last region-1 position and steps y down to 0. Each position emits its
/// 4 quadrant reflections around `center`.
///
/// Radii are real; x advances in whole units from 0 and y in whole units from
/// `ry`. A zero `rx` yields the vertical axis, a zero `ry` the horizontal axis
/// and both zero the center alone. Negative or non-finite radii are rejected.
pub fn rasterize_ellipse(center: Point, rx: f64, ry: f64) -> Result<Vec<Point>> {
    check_radius(rx)?;
    check_radius(ry)?;

    if rx == 0.0 && ry == 0.0 {
        return Ok(vec![center]);
    }

    let mut out = Vec::new();

    if ry == 0.0 {
        // Both decision terms degenerate; emit the flattened ellipse directly
        debug!("ellipse with ry = 0, emitting horizontal axis only");
        let mut x = 0.0;
        while x <= rx {
            push_quadrants(&mut out, center, x, 0.0);
            x += 1.0;
        }
        return Ok(out);
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;

    let mut x = 0.0;
    let mut y = ry;
    let mut dx = 2.0 * ry2 * x;
    let mut dy = 2.0 * rx2 * y;

    // Region 1: |slope| < 1
    let mut p1 = ry2 - rx2 * ry + 0.25 * rx2;
    while dx < dy {
        push_quadrants(&mut out, center, x, y);
        x += 1.0;
        dx += 2.0 * ry2;
        if p1 < 0.0 {
            p1 += dx + ry2;
        } else {
            y -= 1.0;
            dy -= 2.0 * rx2;
            p1 += dx - dy + ry2;
        }
    }

    // Region 2: |slope| >= 1
    let mut p2 = ry2 * (x + 0.5) * (x + 0.5) + rx2 * (y - 1.0) * (y - 1.0) - rx2 * ry2;
    while y >= 0.0 {
        push_quadrants(&mut out, center, x, y);
        y -= 1.0;
        dy -= 2.0 * rx2;
        if p2 > 0.0 {
            p2 += rx2 - dy;
        } else {
            x += 1.0;
            dx += 2.0 * ry2;
            p2 += dx - dy + rx2;
        }
    }

    Ok(out)
}
