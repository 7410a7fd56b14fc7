//! Data charts built from the line and polygon primitives.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Pixel, Point};
use crate::raster::BresenhamLine;

/// Screen rectangle a chart is laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 25.0,
            y: 50.0,
            width: 600.0,
            height: 300.0,
        }
    }
}

/// Polyline chart of a value series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineGraph {
    pub viewport: Viewport,
}

impl LineGraph {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Places each value in the viewport.
    ///
    /// Values are spaced evenly across the width; the lowest maps to the
    /// bottom edge and the highest to the top. A flat series is drawn along
    /// the bottom edge. Fewer than two values produce no points.
    pub fn layout(&self, values: &[f64]) -> Vec<Point> {
        if values.len() < 2 {
            return Vec::new();
        }

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let scale_y = if max != min {
            self.viewport.height / (max - min)
        } else {
            1.0
        };
        let scale_x = self.viewport.width / (values.len() - 1) as f64;

        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Point::new(
                    self.viewport.x + i as f64 * scale_x,
                    self.viewport.y + (v - min) * scale_y,
                )
            })
            .collect()
    }

    /// Rasterizes the series as connected Bresenham segments.
    ///
    /// Joints between segments appear once.
    pub fn pixels(&self, values: &[f64]) -> Vec<Pixel> {
        let points = self.layout(values);
        let mut pixels: Vec<Pixel> = Vec::new();
        for pair in points.windows(2) {
            let line = BresenhamLine::from_points(pair[0], pair[1]);
            let skip = usize::from(!pixels.is_empty());
            pixels.extend(line.skip(skip));
        }
        pixels
    }
}

/// One slice of a pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    /// Index of the value this sector represents.
    pub index: usize,
    pub center: Point,
    /// Radians, counter-clockwise from the positive x axis.
    pub start_angle: f64,
    pub end_angle: f64,
    /// Points along the arc from `start_angle` to `end_angle`.
    pub arc: Vec<Point>,
}

impl Sector {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Closed outline: the center followed by the arc.
    pub fn outline(&self) -> Vec<Point> {
        let mut outline = Vec::with_capacity(self.arc.len() + 1);
        outline.push(self.center);
        outline.extend_from_slice(&self.arc);
        outline
    }

    /// Triangle fan covering the sector.
    pub fn triangles(&self) -> Vec<[Point; 3]> {
        self.arc
            .windows(2)
            .map(|w| [self.center, w[0], w[1]])
            .collect()
    }
}

/// Pie chart approximating each arc with a fixed number of steps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChart {
    pub center: Point,
    pub radius: f64,
    pub steps: usize,
}

impl Default for PieChart {
    fn default() -> Self {
        Self {
            center: Point::new(325.0, 200.0),
            radius: 150.0,
            steps: 20,
        }
    }
}

impl PieChart {
    pub fn new(center: Point, radius: f64, steps: usize) -> Self {
        Self {
            center,
            radius,
            steps,
        }
    }

    fn arc_point(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Splits the full circle into sectors proportional to `values`.
    ///
    /// Sectors start at angle 0 and run counter-clockwise in input order.
    /// Each arc has `steps + 1` points. A zero total produces no sectors;
    /// zero values produce empty-sweep sectors.
    pub fn sectors(&self, values: &[f64]) -> Result<Vec<Sector>> {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(Error::InvalidChartValue { index, value });
        }

        let total: f64 = values.iter().sum();
        if total == 0.0 {
            return Ok(Vec::new());
        }

        let steps = self.steps.max(1);
        let mut start_angle = 0.0;
        let sectors = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let end_angle = start_angle + TAU * value / total;
                let arc = (0..=steps)
                    .map(|i| {
                        let t = i as f64 / steps as f64;
                        self.arc_point(start_angle + (end_angle - start_angle) * t)
                    })
                    .collect();
                let sector = Sector {
                    index,
                    center: self.center,
                    start_angle,
                    end_angle,
                    arc,
                };
                start_angle = end_angle;
                sector
            })
            .collect();

        Ok(sectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_layout_demo_series() {
        let graph = LineGraph::default();
        let points = graph.layout(&[1.0, 3.0, 2.0, 5.0, 4.0]);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Point::new(25.0, 50.0));
        assert_eq!(points[3], Point::new(475.0, 350.0));
        assert_relative_eq!(points[1].y, 200.0);
        assert_eq!(points[4].x, 625.0);
    }

    #[test]
    fn test_layout_degenerate_series() {
        let graph = LineGraph::default();
        assert!(graph.layout(&[]).is_empty());
        assert!(graph.layout(&[3.0]).is_empty());

        // Flat data sits on the bottom edge
        let flat = graph.layout(&[2.0, 2.0, 2.0]);
        assert!(flat.iter().all(|p| p.y == 50.0));
    }

    #[test]
    fn test_pixels_are_connected() {
        let graph = LineGraph::default();
        let pixels = graph.pixels(&[1.0, 3.0, 2.0, 5.0, 4.0]);
        assert_eq!(pixels.first(), Some(&Pixel::new(25, 50)));
        assert_eq!(pixels.last(), Some(&Pixel::new(625, 275)));
        for w in pixels.windows(2) {
            assert_eq!(w[0].chebyshev(w[1]), 1, "gap between {:?} and {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn test_sectors_cover_circle() {
        let pie = PieChart::default();
        let sectors = pie.sectors(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(sectors.len(), 4);
        assert_eq!(sectors[0].start_angle, 0.0);
        assert_relative_eq!(sectors[0].sweep(), TAU * 0.1);
        assert_relative_eq!(sectors[3].end_angle, TAU);
        for pair in sectors.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
    }

    #[test]
    fn test_sector_arc() {
        let pie = PieChart::default();
        let sectors = pie.sectors(&[1.0, 1.0]).unwrap();
        let first = &sectors[0];
        assert_eq!(first.arc.len(), 21);
        assert_abs_diff_eq!(first.arc[0], Point::new(475.0, 200.0), epsilon = 1e-9);
        assert_abs_diff_eq!(first.arc[20], Point::new(175.0, 200.0), epsilon = 1e-9);
        assert_abs_diff_eq!(first.arc[10], Point::new(325.0, 350.0), epsilon = 1e-9);
        assert_eq!(first.outline()[0], pie.center);
        assert_eq!(first.triangles().len(), 20);
    }

    #[test]
    fn test_zero_total() {
        let pie = PieChart::default();
        assert!(pie.sectors(&[]).unwrap().is_empty());
        assert!(pie.sectors(&[0.0, 0.0]).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_values() {
        let pie = PieChart::default();
        assert!(matches!(
            pie.sectors(&[1.0, -2.0]),
            Err(Error::InvalidChartValue { index: 1, .. })
        ));
        assert!(pie.sectors(&[f64::NAN]).is_err());
    }
}
