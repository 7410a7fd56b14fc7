mod canvas;
pub mod fill;

pub use canvas::Canvas;
