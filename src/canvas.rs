//! Fixed-size monochrome canvas.
//!
//! Storage lives inline in the value, so a canvas can sit in a `static`
//! or on the stack of a target with no allocator.

use crate::color::Monochrome;
use crate::geometry::Xy;
use crate::sink::PixelSink;

/// A `W`×`H` 1-bit pixel buffer.
///
/// Writes outside the canvas and transparent writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoCanvas<const W: usize, const H: usize> {
    lit: [[bool; W]; H],
}

impl<const W: usize, const H: usize> Default for MonoCanvas<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> MonoCanvas<W, H> {
    /// A blank (all white) canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self { lit: [[false; W]; H] }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    fn index(at: Xy) -> Option<(usize, usize)> {
        let x = usize::try_from(at.x).ok()?;
        let y = usize::try_from(at.y).ok()?;
        (x < W && y < H).then_some((x, y))
    }

    /// Color at `at`, or `None` outside the canvas.
    #[must_use]
    pub fn get(&self, at: Xy) -> Option<Monochrome> {
        Self::index(at).map(|(x, y)| Monochrome::from(self.lit[y][x]))
    }

    /// Paint the whole canvas. Transparent leaves it untouched.
    pub fn clear(&mut self, color: Monochrome) {
        let lit = match color {
            Monochrome::Black => true,
            Monochrome::White => false,
            Monochrome::Transparent => return,
        };
        for row in &mut self.lit {
            row.fill(lit);
        }
    }

    /// Number of black pixels.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.lit.iter().map(|row| row.iter().filter(|&&p| p).count()).sum()
    }

    /// Coordinates of black pixels, row by row.
    pub fn iter_lit(&self) -> impl Iterator<Item = Xy> + '_ {
        self.lit.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &p)| p)
                .map(move |(x, _)| Xy::new(x as i32, y as i32))
        })
    }

    /// Rows of the canvas, `true` for black.
    #[must_use]
    pub fn rows(&self) -> &[[bool; W]; H] {
        &self.lit
    }
}

impl<const W: usize, const H: usize> PixelSink<Monochrome> for MonoCanvas<W, H> {
    fn write(&mut self, at: Xy, color: Monochrome) {
        let Some((x, y)) = Self::index(at) else {
            return;
        };
        match color {
            Monochrome::Black => self.lit[y][x] = true,
            Monochrome::White => self.lit[y][x] = false,
            Monochrome::Transparent => {}
        }
    }
}
