//! Demo scenes drawing each algorithm onto a [`Canvas`].

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::clipper::{clip_polygon, clip_segment, ClipAlgorithm};
use crate::colors;
use crate::config::SceneConfig;
use crate::error::{Error, Result};
use crate::raster::{rasterize_circle, rasterize_ellipse, LineAlgorithm};
use crate::render::Canvas;
use crate::transform::CompositeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Lines,
    Circle,
    Ellipse,
    CohenSutherland,
    LiangBarsky,
    SutherlandHodgeman,
    LineGraph,
    PieChart,
    Transformations(CompositeMode),
}

impl Scene {
    /// Every scene, in key order. The first nine are bound to keys 1 to 9.
    pub const ALL: [Scene; 13] = [
        Scene::Lines,
        Scene::Circle,
        Scene::Ellipse,
        Scene::CohenSutherland,
        Scene::LiangBarsky,
        Scene::SutherlandHodgeman,
        Scene::LineGraph,
        Scene::PieChart,
        Scene::Transformations(CompositeMode::TranslateRotate),
        Scene::Transformations(CompositeMode::ScaleReflect),
        Scene::Transformations(CompositeMode::RotateShear),
        Scene::Transformations(CompositeMode::TranslateScaleRotate),
        Scene::Transformations(CompositeMode::All),
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The scene after this one, wrapping around.
    pub fn next(&self) -> Scene {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Scene {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(&self) -> String {
        match self {
            Scene::Lines => "Bresenham and DDA Lines".to_string(),
            Scene::Circle => "Midpoint Circle".to_string(),
            Scene::Ellipse => "Midpoint Ellipse".to_string(),
            Scene::CohenSutherland => "Cohen-Sutherland Line Clipping".to_string(),
            Scene::LiangBarsky => "Liang-Barsky Line Clipping".to_string(),
            Scene::SutherlandHodgeman => "Sutherland-Hodgeman Polygon Clipping".to_string(),
            Scene::LineGraph => "Line Graph".to_string(),
            Scene::PieChart => "Pie Chart".to_string(),
            Scene::Transformations(mode) => format!("Composite Transformations: {}", mode),
        }
    }

    /// Clears `canvas` and draws this scene.
    pub fn render(&self, config: &SceneConfig, canvas: &mut Canvas) -> Result<()> {
        canvas.clear(colors::BACKGROUND);
        match self {
            Scene::Lines => render_lines(config, canvas),
            Scene::Circle => {
                let c = config.circle;
                canvas.plot_pixels(rasterize_circle(c.center, c.radius), colors::WHITE);
            }
            Scene::Ellipse => {
                let e = config.ellipse;
                canvas.plot(rasterize_ellipse(e.center, e.rx, e.ry)?, colors::WHITE);
            }
            Scene::CohenSutherland => {
                render_segment_clipping(config, canvas, ClipAlgorithm::CohenSutherland)
            }
            Scene::LiangBarsky => {
                render_segment_clipping(config, canvas, ClipAlgorithm::LiangBarsky)
            }
            Scene::SutherlandHodgeman => render_polygon_clipping(config, canvas),
            Scene::LineGraph => {
                let lg = &config.line_graph;
                canvas.plot_pixels(lg.graph.pixels(&lg.data), colors::WHITE);
            }
            Scene::PieChart => {
                let pie = &config.pie_chart;
                for sector in pie.chart.sectors(&pie.data)? {
                    let color = colors::palette(sector.index);
                    for [a, b, c] in sector.triangles() {
                        canvas.fill_triangle(a, b, c, color);
                    }
                }
            }
            Scene::Transformations(mode) => render_transformations(*mode, config, canvas),
        }
        Ok(())
    }
}

fn render_lines(config: &SceneConfig, canvas: &mut Canvas) {
    for line in &config.lines {
        let (p1, p2) = line.endpoints();
        let color = match line.algorithm {
            LineAlgorithm::Bresenham => colors::WHITE,
            LineAlgorithm::Dda => colors::CYAN,
        };
        canvas.draw_line(p1, p2, line.algorithm, color);
    }
}

fn render_segment_clipping(config: &SceneConfig, canvas: &mut Canvas, algorithm: ClipAlgorithm) {
    let window = &config.clip_window;
    canvas.draw_window(window, colors::WHITE);

    for segment in config.segments() {
        canvas.draw_line(segment.p1, segment.p2, LineAlgorithm::Bresenham, colors::RED);
        match clip_segment(segment, window, algorithm) {
            Some(clipped) => {
                canvas.draw_line(clipped.p1, clipped.p2, LineAlgorithm::Bresenham, colors::GREEN);
            }
            None => debug!("{}: rejected {:?}", algorithm, segment),
        }
    }
}

fn render_polygon_clipping(config: &SceneConfig, canvas: &mut Canvas) {
    let window = &config.clip_window;
    canvas.draw_window(window, colors::WHITE);

    for polygon in &config.polygons {
        canvas.draw_polygon(polygon, colors::RED);
        let clipped = clip_polygon(polygon, window);
        debug!(
            "sutherland-hodgeman: {} vertices -> {}",
            polygon.len(),
            clipped.len()
        );
        canvas.draw_polygon(&clipped, colors::GREEN);
    }
}

fn render_transformations(mode: CompositeMode, config: &SceneConfig, canvas: &mut Canvas) {
    let transform = mode.transform(&config.transform.params);

    for (i, shape) in config.transform.shapes.iter().enumerate() {
        canvas.fill_polygon(shape, colors::palette(i));
        canvas.fill_polygon(&transform.apply(shape), colors::palette(i + 2));
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scene::Lines => f.write_str("lines"),
            Scene::Circle => f.write_str("circle"),
            Scene::Ellipse => f.write_str("ellipse"),
            Scene::CohenSutherland => f.write_str("cohen-sutherland"),
            Scene::LiangBarsky => f.write_str("liang-barsky"),
            Scene::SutherlandHodgeman => f.write_str("sutherland-hodgeman"),
            Scene::LineGraph => f.write_str("line-graph"),
            Scene::PieChart => f.write_str("pie-chart"),
            Scene::Transformations(mode) => write!(f, "transform-{}", mode.slug()),
        }
    }
}

impl FromStr for Scene {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Scene::ALL
            .into_iter()
            .find(|scene| scene.to_string() == wanted)
            .ok_or_else(|| Error::UnknownScene(s.to_string()))
    }
}
