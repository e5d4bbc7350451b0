//! Straight line segments.
//!
//! Rasterized with Bresenham's integer algorithm: no floating point, no
//! division. See Bresenham, J. E. (1965). "Algorithm for computer control
//! of a digital plotter." *IBM Systems Journal*, 4(1), 25-30.

use core::iter::FusedIterator;

use crate::color::PixelColor;
use crate::drawable::Drawable;
use crate::geometry::Xy;
use crate::sink::PixelSink;

/// A line segment from `start` to `end` in a single foreground color.
///
/// Both endpoints are plotted. A segment whose endpoints coincide plots
/// nothing. The pixel set does not depend on which end is `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line<C> {
    start: Xy,
    end: Xy,
    fg: C,
}

impl<C: PixelColor> Line<C> {
    /// Create a black line from `start` to `end`.
    #[must_use]
    pub const fn new(start: Xy, end: Xy) -> Self {
        Self { start, end, fg: C::BLACK }
    }

    /// Set the foreground color.
    #[must_use]
    pub fn color(self, fg: C) -> Self {
        Self { fg, ..self }
    }

    /// The end point.
    #[must_use]
    pub const fn end(&self) -> Xy {
        self.end
    }

    /// The foreground color.
    #[must_use]
    pub const fn foreground(&self) -> C {
        self.fg
    }

    /// Copy of this line moved by `offset`.
    ///
    /// Endpoints are clamped to the `i32` range.
    #[must_use]
    pub fn translate(self, offset: Xy) -> Self {
        Self {
            start: self.start.saturating_add(offset),
            end: self.end.saturating_add(offset),
            fg: self.fg,
        }
    }

    /// The pixels this line covers, from `start` towards `end`.
    ///
    /// Produced lazily; nothing is buffered.
    #[must_use]
    pub fn pixels(&self) -> LinePixels {
        LinePixels::new(self.start, self.end)
    }
}

impl<C: PixelColor> Drawable<C> for Line<C> {
    fn start(&self) -> Xy {
        self.start
    }

    fn render(&self, sink: &mut dyn PixelSink<C>) {
        if self.start == self.end {
            log::trace!("zero-length line at {:?}, nothing to render", self.start);
            return;
        }
        for at in self.pixels() {
            sink.write(at, self.fg);
        }
    }
}

/// Iterator over the pixels of a line, in order from start to end.
///
/// Internally the walk always advances one unit along the primary
/// (longer) axis. Steep lines are walked in a transposed frame and
/// transposed back on output.
#[derive(Debug, Clone)]
pub struct LinePixels {
    /// Current position in the walking frame.
    x: i32,
    y: i32,
    xstep: i32,
    ystep: i32,
    steep: bool,
    /// Error accumulator, `2·Dy − Dx` initially.
    e: i64,
    two_dy: i64,
    two_dy_two_dx: i64,
    /// Secondary-axis advance on a zero accumulator. Only set when walking
    /// towards decreasing primary coordinates, so both directions round
    /// exact midpoints to the same pixel.
    step_on_tie: bool,
    remaining: u64,
}

impl LinePixels {
    fn new(start: Xy, end: Xy) -> Self {
        let mut dx = i64::from(end.x) - i64::from(start.x);
        let mut dy = i64::from(end.y) - i64::from(start.y);

        let steep = dy.abs() >= dx.abs();
        let from = if steep {
            core::mem::swap(&mut dx, &mut dy);
            start.transpose()
        } else {
            start
        };

        let xstep = if dx < 0 { -1 } else { 1 };
        let ystep = if dy < 0 { -1 } else { 1 };
        let dx = dx.abs();
        let dy = dy.abs();

        // dx == 0 only when start == end: every other line has a non-zero
        // primary extent after the steep swap.
        let remaining = if dx == 0 { 0 } else { dx as u64 + 1 };

        Self {
            x: from.x,
            y: from.y,
            xstep,
            ystep,
            steep,
            e: 2 * dy - dx,
            two_dy: 2 * dy,
            two_dy_two_dx: 2 * dy - 2 * dx,
            step_on_tie: xstep < 0,
            remaining,
        }
    }

    #[inline]
    fn advances_secondary(&self) -> bool {
        self.e > 0 || (self.step_on_tie && self.e == 0)
    }
}

impl Iterator for LinePixels {
    type Item = Xy;

    fn next(&mut self) -> Option<Xy> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let here = Xy::new(self.x, self.y);
        let out = if self.steep { here.transpose() } else { here };

        // The endpoint may sit at the edge of the i32 range; stepping past
        // it would overflow.
        if self.remaining > 0 {
            if self.advances_secondary() {
                self.e += self.two_dy_two_dx;
                self.y += self.ystep;
            } else {
                self.e += self.two_dy;
            }
            self.x += self.xstep;
        }

        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for LinePixels {}
