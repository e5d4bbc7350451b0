//! The drawable capability and its tagged-variant form.

use crate::circle::Circle;
use crate::color::PixelColor;
use crate::geometry::Xy;
use crate::line::Line;
use crate::sink::PixelSink;

/// A shape that can paint itself onto a pixel sink.
///
/// Every drawable carries an anchor coordinate, `start`, fixed at
/// construction. Rendering borrows the sink for the duration of the
/// call only and keeps no state between calls.
pub trait Drawable<C: PixelColor> {
    /// The anchor coordinate the shape is drawn relative to.
    fn start(&self) -> Xy;

    /// Paint the shape.
    fn render(&self, sink: &mut dyn PixelSink<C>);
}

/// Render a sequence of drawables in order.
///
/// Later drawables paint over earlier ones.
pub fn render_all<C, D>(drawables: &[D], sink: &mut dyn PixelSink<C>)
where
    C: PixelColor,
    D: Drawable<C>,
{
    for drawable in drawables {
        drawable.render(sink);
    }
}

impl<C: PixelColor, D: Drawable<C> + ?Sized> Drawable<C> for &D {
    fn start(&self) -> Xy {
        (**self).start()
    }

    fn render(&self, sink: &mut dyn PixelSink<C>) {
        (**self).render(sink);
    }
}

/// Any of the shapes this crate knows how to rasterize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<C> {
    /// A straight segment.
    Line(Line<C>),
    /// A circle, outlined or filled.
    Circle(Circle<C>),
}

impl<C: PixelColor> Shape<C> {
    /// Copy of this shape moved by `offset`.
    #[must_use]
    pub fn translate(self, offset: Xy) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.translate(offset)),
            Self::Circle(circle) => Self::Circle(circle.translate(offset)),
        }
    }
}

impl<C: PixelColor> Drawable<C> for Shape<C> {
    fn start(&self) -> Xy {
        match self {
            Self::Line(line) => line.start(),
            Self::Circle(circle) => circle.start(),
        }
    }

    fn render(&self, sink: &mut dyn PixelSink<C>) {
        match self {
            Self::Line(line) => line.render(sink),
            Self::Circle(circle) => circle.render(sink),
        }
    }
}

impl<C> From<Line<C>> for Shape<C> {
    fn from(line: Line<C>) -> Self {
        Self::Line(line)
    }
}

impl<C> From<Circle<C>> for Shape<C> {
    fn from(circle: Circle<C>) -> Self {
        Self::Circle(circle)
    }
}
