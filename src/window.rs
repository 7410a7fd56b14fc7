use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::error::{Error, Result};

pub const FPS: u64 = 30;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    /// Zero-based scene index from the number keys.
    SelectScene(usize),
    NextScene,
    PreviousScene,
}

fn sdl_error(e: impl ToString) -> Error {
    Error::Window(e.to_string())
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// SDL2 window that shows a finished ARGB8888 frame.
pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(sdl_error)?;
        let video_subsystem = sdl_context.video().map_err(sdl_error)?;
        let timer_subsystem = sdl_context.timer().map_err(sdl_error)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(sdl_error)?;

        let canvas = window.into_canvas().build().map_err(sdl_error)?;
        let event_pump = sdl_context.event_pump().map_err(sdl_error)?;

        Ok(Self {
            canvas,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains pending events and returns the last one that matters.
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            let mapped = match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => key_event(key),
                _ => WindowEvent::None,
            };
            if mapped != WindowEvent::None {
                result = mapped;
            }
        }
        result
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(sdl_error)
    }

    /// Creator for textures that can be copied to this window. It must outlive
    /// every texture made from it.
    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    /// Allocates the streaming ARGB8888 texture that [`Window::present`] reuses
    /// for every frame.
    pub fn create_frame_texture<'a>(
        &self,
        creator: &'a TextureCreator<WindowContext>,
    ) -> Result<Texture<'a>> {
        creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, self.width, self.height)
            .map_err(sdl_error)
    }

    /// Uploads `buffer` (`width * height` ARGB8888 pixels as bytes) into
    /// `texture` and shows it.
    pub fn present(&mut self, texture: &mut Texture<'_>, buffer: &[u8]) -> Result<()> {
        let pitch = frame_pitch(buffer, self.width, self.height)?;
        texture.update(None, buffer, pitch).map_err(sdl_error)?;

        self.canvas.clear();
        self.canvas
            .copy(texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

/// Bytes per row of a `width x height` ARGB8888 frame, once `buffer` is
/// checked to hold exactly one such frame.
fn frame_pitch(buffer: &[u8], width: u32, height: u32) -> Result<usize> {
    let pitch = width as usize * 4;
    if buffer.len() != pitch * height as usize {
        return Err(Error::Window(format!(
            "frame of {} bytes does not fit a {}x{} texture",
            buffer.len(),
            width,
            height
        )));
    }
    Ok(pitch)
}

fn key_event(key: Keycode) -> WindowEvent {
    let digits = [
        Keycode::Num1,
        Keycode::Num2,
        Keycode::Num3,
        Keycode::Num4,
        Keycode::Num5,
        Keycode::Num6,
        Keycode::Num7,
        Keycode::Num8,
        Keycode::Num9,
    ];
    if let Some(index) = digits.iter().position(|&d| d == key) {
        return WindowEvent::SelectScene(index);
    }
    match key {
        Keycode::Right | Keycode::Space => WindowEvent::NextScene,
        Keycode::Left => WindowEvent::PreviousScene,
        _ => WindowEvent::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_event(Keycode::Num1), WindowEvent::SelectScene(0));
        assert_eq!(key_event(Keycode::Num9), WindowEvent::SelectScene(8));
        assert_eq!(key_event(Keycode::Right), WindowEvent::NextScene);
        assert_eq!(key_event(Keycode::Left), WindowEvent::PreviousScene);
        assert_eq!(key_event(Keycode::A), WindowEvent::None);
    }

    #[test]
    fn test_frame_pitch() {
        // Repeated uploads into one texture need every frame to match its size
        let frame = vec![0u8; 8 * 3 * 4];
        assert_eq!(frame_pitch(&frame, 8, 3).unwrap(), 32);
        assert!(matches!(frame_pitch(&frame[4..], 8, 3), Err(Error::Window(_))));
        assert!(matches!(frame_pitch(&frame, 3, 8), Ok(12)));
        assert!(matches!(frame_pitch(&frame, 9, 3), Err(Error::Window(_))));
    }
}
