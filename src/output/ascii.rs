//! Plain-text output, one character per pixel.
//!
//! Meant for eyeballing small renders in a terminal and for readable
//! golden comparisons in tests.

use crate::canvas::MonoCanvas;
use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Text encoder configuration.
#[derive(Debug, Clone)]
pub struct AsciiEncoder {
    ink: char,
    blank: char,
    background: Rgba,
}

impl Default for AsciiEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AsciiEncoder {
    /// Create an encoder printing `#` for ink and `.` for blank, with a
    /// transparent framebuffer background.
    #[must_use]
    pub fn new() -> Self {
        Self { ink: '#', blank: '.', background: Rgba::TRANSPARENT }
    }

    /// Character for painted pixels.
    #[must_use]
    pub fn ink(mut self, ink: char) -> Self {
        self.ink = ink;
        self
    }

    /// Character for unpainted pixels.
    #[must_use]
    pub fn blank(mut self, blank: char) -> Self {
        self.blank = blank;
        self
    }

    /// Framebuffer color that counts as unpainted.
    #[must_use]
    pub fn background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Render a framebuffer: any pixel other than the background is ink.
    #[must_use]
    pub fn encode_framebuffer(&self, fb: &Framebuffer) -> String {
        self.encode(fb.width() as usize, fb.height() as usize, |x, y| {
            fb.get_pixel(x as u32, y as u32).is_some_and(|px| px != self.background)
        })
    }

    /// Render a monochrome canvas: black pixels are ink.
    #[must_use]
    pub fn encode_canvas<const W: usize, const H: usize>(&self, canvas: &MonoCanvas<W, H>) -> String {
        let rows = canvas.rows();
        self.encode(W, H, |x, y| rows[y][x])
    }

    fn encode(&self, width: usize, height: usize, inked: impl Fn(usize, usize) -> bool) -> String {
        let mut output = String::with_capacity((width + 1) * height);
        for y in 0..height {
            for x in 0..width {
                output.push(if inked(x, y) { self.ink } else { self.blank });
            }
            output.push('\n');
        }
        output
    }
}
