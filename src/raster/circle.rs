//! Midpoint circle rasterizer.

use crate::geometry::Pixel;

/// Upper bound on octant steps reserved up front; larger circles grow the
/// output as they go.
const MAX_RESERVED_STEPS: usize = 1 << 16;

/// Emits the 8 octant reflections of `(x, y)` around `center`, skipping any
/// that fall outside the `i32` pixel range.
#[inline]
fn push_octants(out: &mut Vec<Pixel>, center: Pixel, x: i64, y: i64) {
    let xc = i64::from(center.x);
    let yc = i64::from(center.y);
    let candidates = [
        (xc + x, yc + y),
        (xc - x, yc + y),
        (xc + x, yc - y),
        (xc - x, yc - y),
        (xc + y, yc + x),
        (xc - y, yc + x),
        (xc + y, yc - x),
        (xc - y, yc - x),
    ];
    out.extend(candidates.into_iter().filter_map(|(px, py)| {
        Some(Pixel::new(i32::try_from(px).ok()?, i32::try_from(py).ok()?))
    }));
}

/// Rasterizes a circle with the midpoint algorithm.
///
/// Walks one octant from `(0, r)` while `x < y`, keeping the decision term
/// `p = 1 - r` and updating it by `2x + 1` (stay on the row) or `2x - 2y + 1`
/// (step y down). Every computed `(x, y)` contributes its 8 symmetric pixels
/// in a fixed order, so the output length is a multiple of 8. Points on the
/// axes or on the diagonal appear more than once.
///
/// The walk runs in `i64`, so any `u32` radius around any center is valid.
/// Pixels whose coordinates leave the `i32` range are dropped, which breaks
/// the multiple-of-8 length only for circles that cross that range.
///
/// A zero radius yields the center alone.
pub fn rasterize_circle(center: Pixel, radius: u32) -> Vec<Pixel> {
    if radius == 0 {
        return vec![center];
    }

    let r = i64::from(radius);
    let mut x = 0;
    let mut y = r;
    let mut p = 1 - r;

    // The octant holds roughly r / sqrt(2) steps
    let steps = (radius as usize / 4 * 3 + 2).min(MAX_RESERVED_STEPS);
    let mut out = Vec::with_capacity(8 * steps);
    push_octants(&mut out, center, x, y);

    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * x - 2 * y + 1;
        }
        push_octants(&mut out, center, x, y);
    }

    out
}
