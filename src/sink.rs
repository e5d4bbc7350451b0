//! Pixel sinks: the only thing a shape ever talks to.
//!
//! A sink accepts single colored pixel writes at integer coordinates.
//! What happens to out-of-range coordinates is up to the sink; the
//! rasterizers never check bounds.

use crate::geometry::Xy;

/// Destination for pixel writes.
///
/// The trait is object safe, so shapes render into `&mut dyn PixelSink<C>`
/// and any sink can stand in for any other.
pub trait PixelSink<C> {
    /// Write one pixel.
    fn write(&mut self, at: Xy, color: C);
}

/// Adapts a closure into a [`PixelSink`].
///
/// ```
/// use trueno_raster::prelude::*;
///
/// let mut count = 0;
/// Line::new(Xy::new(0, 0), Xy::new(5, 2))
///     .color(Rgba::RED)
///     .render(&mut FnSink(|_at: Xy, _c: Rgba| count += 1));
/// assert_eq!(count, 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<C, F> PixelSink<C> for FnSink<F>
where
    F: FnMut(Xy, C),
{
    #[inline]
    fn write(&mut self, at: Xy, color: C) {
        (self.0)(at, color);
    }
}

#[cfg(feature = "std")]
pub use self::record::PixelLog;

#[cfg(feature = "std")]
mod record {
    use std::collections::BTreeSet;

    use super::PixelSink;
    use crate::geometry::Xy;

    /// Sink that records every write verbatim, in order.
    ///
    /// Nothing is filtered: transparent writes, repeated writes and
    /// negative coordinates all land in the log.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PixelLog<C> {
        writes: Vec<(Xy, C)>,
    }

    impl<C> Default for PixelLog<C> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<C> PixelLog<C> {
        /// Create an empty log.
        #[must_use]
        pub const fn new() -> Self {
            Self { writes: Vec::new() }
        }

        /// All writes in the order they happened.
        #[must_use]
        pub fn writes(&self) -> &[(Xy, C)] {
            &self.writes
        }

        /// Written coordinates in order, including repeats.
        pub fn positions(&self) -> impl Iterator<Item = Xy> + '_ {
            self.writes.iter().map(|&(at, _)| at)
        }

        /// The set of distinct coordinates written.
        #[must_use]
        pub fn distinct(&self) -> BTreeSet<Xy> {
            self.positions().collect()
        }

        /// Number of writes, including repeats.
        #[must_use]
        pub fn len(&self) -> usize {
            self.writes.len()
        }

        /// Whether nothing was written.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.writes.is_empty()
        }

        /// Forget all recorded writes.
        pub fn clear(&mut self) {
            self.writes.clear();
        }
    }

    impl<C: Copy> PixelLog<C> {
        /// Color of the last write to `at`, if any.
        #[must_use]
        pub fn color_at(&self, at: Xy) -> Option<C> {
            self.writes.iter().rev().find(|(p, _)| *p == at).map(|&(_, c)| c)
        }
    }

    impl<C> PixelSink<C> for PixelLog<C> {
        fn write(&mut self, at: Xy, color: C) {
            self.writes.push((at, color));
        }
    }
}
