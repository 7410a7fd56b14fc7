//! Line rasterizers: integer Bresenham and floating-point DDA.
//!
//! Both are lazy iterators. Cloning one before it is consumed gives an
//! independent restart of the same sequence.

use crate::geometry::{Pixel, Point};

/// Bresenham line iterator over the 8-connected path from `start` to `end`.
///
/// Uses only integer addition and comparison. Each yielded pixel differs from
/// the previous one by exactly one of (±1,0), (0,±1) or (±1,±1), and the path
/// has `max(|dx|, |dy|) + 1` pixels.
///
/// Ties (the ideal line passing exactly between two candidate pixels) are
/// broken toward the smaller coordinate on the tied axis. Because that rule is
/// expressed in absolute coordinates rather than in the direction of travel,
/// swapping the endpoints yields the same pixel set in reverse order.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    end: Pixel,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    pub fn new(start: Pixel, end: Pixel) -> Self {
        // Spans between i32 extremes need 33 bits
        let dx = (i64::from(end.x) - i64::from(start.x)).abs();
        let dy = (i64::from(end.y) - i64::from(start.y)).abs();
        Self {
            x: start.x,
            y: start.y,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            // Positive error favors an x step, negative a y step
            err: dx - dy,
            done: false,
        }
    }

    /// Builds the iterator from real endpoints, truncating them to pixels.
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self::new(Pixel::truncate(p1), Pixel::truncate(p2))
    }

    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            (Pixel::new(self.x, self.y).chebyshev(self.end) as usize).saturating_add(1)
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = Pixel::new(self.x, self.y);
        if current == self.end {
            self.done = true;
            return Some(current);
        }

        // Compare the doubled error against -dy and dx so both tests stay integral.
        let e2 = 2 * self.err;

        // On a tie, a positive step keeps the smaller coordinate by not moving,
        // a negative step reaches it by moving.
        let step_x = if self.sx > 0 { e2 > -self.dy } else { e2 >= -self.dy };
        let step_y = if self.sy > 0 { e2 < self.dx } else { e2 <= self.dx };

        // Both can fire together, giving a diagonal step.
        if step_x {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if step_y {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BresenhamLine {}

/// Digital differential analyzer over real endpoints.
///
/// Emits `floor(steps) + 1` points where `steps = max(|dx|, |dy|)`, advancing
/// by `dx / steps` and `dy / steps` each time. The increments accumulate, so
/// unlike [`BresenhamLine`] the outputs are neither integral nor free of
/// floating error; round them with [`Pixel::round`] to plot.
///
/// For integer endpoints the rounded first and last points match the first
/// and last pixels of [`BresenhamLine`]. Real endpoints are not truncated
/// here, so `(0.9, 0.2)` plots at `(1, 0)` where Bresenham starts at `(0, 0)`.
///
/// The point count saturates at `usize::MAX` for spans too long to count.
#[derive(Clone, Debug)]
pub struct DdaLine {
    current: Point,
    x_inc: f64,
    y_inc: f64,
    remaining: usize,
}

impl DdaLine {
    pub fn new(p1: Point, p2: Point) -> Self {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let steps = dx.abs().max(dy.abs());

        if steps == 0.0 || !steps.is_finite() {
            return Self {
                current: p1,
                x_inc: 0.0,
                y_inc: 0.0,
                remaining: 1,
            };
        }

        Self {
            current: p1,
            x_inc: dx / steps,
            y_inc: dy / steps,
            remaining: (steps as usize).saturating_add(1),
        }
    }
}

impl Iterator for DdaLine {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = self.current;
        self.current.x += self.x_inc;
        self.current.y += self.y_inc;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DdaLine {}
