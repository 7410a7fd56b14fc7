//! Pixel surface the scenes draw into.
//!
//! Provides the [`Canvas`] struct which owns an ARGB8888 color buffer and
//! implements plotting, line, outline and fill operations in world
//! coordinates with the origin at the bottom-left corner.

use std::path::Path;

use log::info;

use super::fill;
use crate::colors;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Pixel, Point};
use crate::raster::{rasterize_line, LineAlgorithm};

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = width as usize * height as usize;
        Ok(Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Buffer index for world pixel `(x, y)`; y grows upward, rows are stored top-down.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let row = (self.height - 1 - y as u32) as usize;
            Some(row * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Writes one pixel. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(index) = self.index(x, y) {
            self.color_buffer[index] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|index| self.color_buffer[index])
    }

    /// Plots the pixel nearest to `p`.
    #[inline]
    pub fn plot_point(&mut self, p: Point, color: u32) {
        if p.is_finite() {
            let pixel = Pixel::round(p);
            self.set_pixel(pixel.x, pixel.y, color);
        }
    }

    pub fn plot<I>(&mut self, points: I, color: u32)
    where
        I: IntoIterator<Item = Point>,
    {
        for p in points {
            self.plot_point(p, color);
        }
    }

    pub fn plot_pixels<I>(&mut self, pixels: I, color: u32)
    where
        I: IntoIterator<Item = Pixel>,
    {
        for p in pixels {
            self.set_pixel(p.x, p.y, color);
        }
    }

    pub fn draw_line(&mut self, p1: Point, p2: Point, algorithm: LineAlgorithm, color: u32) {
        self.plot(rasterize_line(p1, p2, algorithm), color);
    }

    /// Draws consecutive points as connected Bresenham lines.
    pub fn draw_polyline(&mut self, points: &[Point], color: u32) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], LineAlgorithm::Bresenham, color);
        }
    }

    /// Draws a closed outline, joining the last vertex back to the first.
    pub fn draw_polygon(&mut self, vertices: &[Point], color: u32) {
        self.draw_polyline(vertices, color);
        if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
            if vertices.len() > 2 {
                self.draw_line(last, first, LineAlgorithm::Bresenham, color);
            }
        }
    }

    pub fn draw_window(&mut self, window: &ClipWindow, color: u32) {
        self.draw_polygon(&window.corners(), color);
    }

    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        if spacing <= 0 {
            return;
        }
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    pub fn fill_triangle(&mut self, v0: Point, v1: Point, v2: Point, color: u32) {
        let (width, height) = (self.width, self.height);
        fill::fill_triangle(v0, v1, v2, width, height, |p| {
            self.set_pixel(p.x, p.y, color)
        });
    }

    /// Fills a polygon as a triangle fan around its first vertex.
    ///
    /// Exact for convex polygons; concave input may spill outside its outline.
    pub fn fill_polygon(&mut self, vertices: &[Point], color: u32) {
        let Some((&anchor, rest)) = vertices.split_first() else {
            return;
        };
        for pair in rest.windows(2) {
            self.fill_triangle(anchor, pair[0], pair[1], color);
        }
    }

    /// Raw ARGB pixels, top row first.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The color buffer as bytes, for streaming into an ARGB8888 texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u8 has no alignment requirement and the byte length covers
        // exactly the u32 buffer, which stays borrowed for the slice's lifetime.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [a, r, g, b] = colors::unpack(self.color_buffer[(y * self.width + x) as usize]);
            image::Rgba([r, g, b, a])
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        info!("Saved {}x{} canvas to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            Canvas::new(0, 10),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_y_up_mapping() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.set_pixel(1, 0, colors::RED);
        // World row 0 is the last buffer row
        assert_eq!(canvas.pixels()[2 * 4 + 1], colors::RED);
        assert_eq!(canvas.get_pixel(1, 0), Some(colors::RED));
        assert_eq!(canvas.get_pixel(4, 0), None);
        assert_eq!(canvas.get_pixel(0, -1), None);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.set_pixel(-1, 2, colors::RED);
        canvas.set_pixel(2, 4, colors::RED);
        canvas.plot_point(Point::new(f64::NAN, 1.0), colors::RED);
        assert!(canvas.pixels().iter().all(|&c| c == colors::BACKGROUND));
    }

    #[test]
    fn test_draw_window_outline() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        let window = ClipWindow::new(2.0, 3.0, 10.0, 8.0).unwrap();
        canvas.draw_window(&window, colors::WHITE);
        assert_eq!(canvas.get_pixel(2, 3), Some(colors::WHITE));
        assert_eq!(canvas.get_pixel(10, 8), Some(colors::WHITE));
        assert_eq!(canvas.get_pixel(6, 3), Some(colors::WHITE));
        assert_eq!(canvas.get_pixel(6, 5), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_fill_polygon() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        let square = crate::geometry::rectangle(2.0, 2.0, 5.0, 5.0);
        canvas.fill_polygon(&square, colors::GREEN);
        let filled = canvas.pixels().iter().filter(|&&c| c == colors::GREEN).count();
        assert_eq!(filled, 25);
    }

    #[test]
    fn test_as_bytes_length() {
        let canvas = Canvas::new(8, 2).unwrap();
        assert_eq!(canvas.as_bytes().len(), 64);
    }

    #[test]
    fn test_to_image_orientation() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.set_pixel(0, 1, colors::BLUE);
        let img = canvas.to_image();
        // World y = 1 is the top image row
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
    }
}
