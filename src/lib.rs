//! Classic 2D raster graphics algorithms on a CPU canvas.
//!
//! This crate provides line, circle and ellipse scan conversion, line and
//! polygon clipping against a rectangular window, 2D affine transforms, and
//! simple charts. SDL2 is used only to show finished frames.
//!
//! # Quick Start
//!
//! ```ignore
//! use scanlab::prelude::*;
//!
//! let window = ClipWindow::new(100.0, 100.0, 500.0, 400.0)?;
//! let segment = Segment::from_coords(50.0, 150.0, 550.0, 350.0);
//! let visible = clip_segment(segment, &window, ClipAlgorithm::LiangBarsky);
//!
//! let mut canvas = Canvas::new(800, 600)?;
//! canvas.draw_window(&window, colors::WHITE);
//! if let Some(s) = visible {
//!     canvas.draw_line(s.p1, s.p2, LineAlgorithm::Bresenham, colors::GREEN);
//! }
//! canvas.save_png("clipped.png")?;
//! ```

pub mod chart;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod raster;
pub mod render;
pub mod scene;
pub mod transform;
pub mod window;

pub use clipper::{clip_polygon, clip_segment, ClipAlgorithm, SegmentClipper};
pub use error::{Error, Result};
pub use geometry::{ClipWindow, Pixel, Point, Polygon, Segment};
pub use raster::{rasterize_circle, rasterize_ellipse, rasterize_line, LineAlgorithm};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use scanlab::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::geometry::{rectangle, triangle, ClipWindow, Pixel, Point, Polygon, Segment};

    // Rasterization
    pub use crate::raster::{
        rasterize_circle, rasterize_ellipse, rasterize_line, BresenhamLine, DdaLine, LineAlgorithm,
    };

    // Clipping
    pub use crate::clipper::{
        clip_polygon, clip_segment, ClipAlgorithm, CohenSutherland, LiangBarsky, SegmentClipper,
    };

    // Transform
    pub use crate::math::mat3::Mat3;
    pub use crate::math::vec2::Vec2;
    pub use crate::transform::{composite, CompositeMode, Transform2D, TransformParams};

    // Charts
    pub use crate::chart::{LineGraph, PieChart, Sector, Viewport};

    // Rendering
    pub use crate::colors;
    pub use crate::render::Canvas;
    pub use crate::scene::Scene;

    pub use crate::error::{Error, Result};
}
