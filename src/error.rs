//! Error types for scanlab operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when inputs violate a precondition or an export fails.
///
/// Geometry that merely lies outside a clip window is never an error; the
/// clippers report it as `None` or an empty polygon.
#[derive(Error, Debug)]
pub enum Error {
    /// Clip window with `x_min >= x_max`, `y_min >= y_max` or non-finite bounds.
    #[error("Invalid clip window: ({x_min}, {y_min}) - ({x_max}, {y_max})")]
    InvalidWindow {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },

    /// Negative or non-finite radius passed to a curve rasterizer.
    #[error("Invalid radius: {0}")]
    InvalidRadius(f64),

    /// Canvas with a zero dimension.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Negative or non-finite value in chart data.
    #[error("Invalid chart value at index {index}: {value}")]
    InvalidChartValue { index: usize, value: f64 },

    /// Unknown scene name on the command line or in a config file.
    #[error("Unknown scene: {0}")]
    UnknownScene(String),

    /// Window system failure (SDL reports errors as strings).
    #[error("Window error: {0}")]
    Window(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
