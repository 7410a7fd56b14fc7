//! Scene configuration loaded from JSON.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "circle": { "center": { "x": 200, "y": 200 }, "radius": 50 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::{LineGraph, PieChart};
use crate::error::Result;
use crate::geometry::{rectangle, ClipWindow, Pixel, Point, Polygon, Segment};
use crate::raster::LineAlgorithm;
use crate::transform::TransformParams;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    pub from: [f64; 2],
    pub to: [f64; 2],
    #[serde(default)]
    pub algorithm: LineAlgorithm,
}

impl LineConfig {
    pub fn endpoints(&self) -> (Point, Point) {
        (
            Point::new(self.from[0], self.from[1]),
            Point::new(self.to[0], self.to[1]),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleConfig {
    pub center: Pixel,
    pub radius: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseConfig {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub params: TransformParams,
    /// Shapes drawn before and after the transform.
    pub shapes: Vec<Polygon>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            params: TransformParams::default(),
            shapes: vec![
                vec![
                    Point::new(100.0, 150.0),
                    Point::new(150.0, 150.0),
                    Point::new(125.0, 200.0),
                ],
                rectangle(300.0, 150.0, 50.0, 50.0),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineGraphConfig {
    pub graph: LineGraph,
    pub data: Vec<f64>,
}

impl Default for LineGraphConfig {
    fn default() -> Self {
        Self {
            graph: LineGraph::default(),
            data: vec![1.0, 3.0, 2.0, 5.0, 4.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartConfig {
    pub chart: PieChart,
    pub data: Vec<f64>,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            chart: PieChart::default(),
            data: vec![10.0, 20.0, 30.0, 40.0],
        }
    }
}

/// Everything the demo scenes draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub lines: Vec<LineConfig>,
    pub circle: CircleConfig,
    pub ellipse: EllipseConfig,
    pub clip_window: ClipWindow,
    /// Segments as `[x1, y1, x2, y2]`.
    pub segments: Vec<[f64; 4]>,
    pub polygons: Vec<Polygon>,
    pub transform: TransformConfig,
    pub line_graph: LineGraphConfig,
    pub pie_chart: PieChartConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let poly = |coords: &[(f64, f64)]| -> Polygon {
            coords.iter().map(|&c| Point::from(c)).collect()
        };

        Self {
            width: 800,
            height: 600,
            lines: vec![
                LineConfig {
                    from: [50.0, 50.0],
                    to: [600.0, 150.0],
                    algorithm: LineAlgorithm::Bresenham,
                },
                LineConfig {
                    from: [50.0, 50.0],
                    to: [150.0, 350.0],
                    algorithm: LineAlgorithm::Bresenham,
                },
                LineConfig {
                    from: [100.0, 100.0],
                    to: [500.0, 300.0],
                    algorithm: LineAlgorithm::Dda,
                },
            ],
            circle: CircleConfig {
                center: Pixel::new(325, 200),
                radius: 100,
            },
            ellipse: EllipseConfig {
                center: Point::new(325.0, 200.0),
                rx: 150.0,
                ry: 100.0,
            },
            clip_window: ClipWindow::DEFAULT,
            segments: vec![
                [50.0, 150.0, 550.0, 350.0],
                [150.0, 50.0, 350.0, 450.0],
                [50.0, 50.0, 550.0, 450.0],
                [200.0, 200.0, 300.0, 300.0],
                [600.0, 500.0, 700.0, 600.0],
            ],
            polygons: vec![
                poly(&[(50.0, 150.0), (300.0, 50.0), (550.0, 200.0)]),
                poly(&[(50.0, 150.0), (550.0, 150.0), (550.0, 350.0), (50.0, 350.0)]),
                poly(&[
                    (300.0, 50.0),
                    (350.0, 150.0),
                    (450.0, 150.0),
                    (375.0, 200.0),
                    (400.0, 300.0),
                    (300.0, 225.0),
                    (200.0, 300.0),
                    (225.0, 200.0),
                    (150.0, 150.0),
                    (250.0, 150.0),
                ]),
                poly(&[(200.0, 200.0), (300.0, 200.0), (300.0, 300.0), (200.0, 300.0)]),
                poly(&[(600.0, 500.0), (700.0, 500.0), (700.0, 600.0), (600.0, 600.0)]),
            ],
            transform: TransformConfig::default(),
            line_graph: LineGraphConfig::default(),
            pie_chart: PieChartConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.segments
            .iter()
            .map(|&[x1, y1, x2, y2]| Segment::from_coords(x1, y1, x2, y2))
    }
}
