//! # Trueno-Raster
//!
//! Integer-only rasterization of lines and circles onto abstract pixel sinks.
//!
//! Everything a shape needs from the outside world is a [`PixelSink`]: a
//! single "write this color at this coordinate" operation. Shapes are plain
//! `Copy` values that render themselves into any sink, whether a display
//! driver, the fixed-size [`MonoCanvas`](canvas::MonoCanvas), or the
//! heap-backed [`Framebuffer`](framebuffer::Framebuffer).
//!
//! ## Features
//!
//! - **No floating point**: Bresenham lines and midpoint circles in pure
//!   integer arithmetic
//! - **No allocator**: the core is `no_std` and never allocates
//! - **Lazy**: [`Line::pixels`](line::Line::pixels) yields coordinates on demand
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut canvas = MonoCanvas::<32, 32>::new();
//!
//! Line::new(Xy::new(0, 0), Xy::new(31, 10)).render(&mut canvas);
//! Circle::new(Xy::new(16, 16), 8)
//!     .fill(Monochrome::Black)
//!     .render(&mut canvas);
//!
//! assert_eq!(canvas.get(Xy::new(16, 16)), Some(Monochrome::Black));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): `Framebuffer`, `PixelLog` and text output
//! - `png`: PNG output
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a
//!   digital plotter."

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Integer coordinates.
pub mod geometry;

/// Pixel sinks.
pub mod sink;

/// The drawable capability.
pub mod drawable;

// ============================================================================
// Shapes
// ============================================================================

/// Bresenham line segments.
pub mod line;

/// Midpoint circles.
pub mod circle;

// ============================================================================
// Sinks and Output
// ============================================================================

/// Fixed-size monochrome canvas.
pub mod canvas;

/// Heap-backed RGBA framebuffer.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod framebuffer;

/// Output encoders (text, PNG).
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use drawable::{Drawable, Shape};
pub use error::{Error, Result};
pub use sink::PixelSink;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::MonoCanvas;
    pub use crate::circle::Circle;
    pub use crate::color::{Monochrome, PixelColor, Rgba};
    pub use crate::drawable::{render_all, Drawable, Shape};
    pub use crate::error::{Error, Result};
    #[cfg(feature = "std")]
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Xy;
    pub use crate::line::Line;
    #[cfg(feature = "std")]
    pub use crate::output::AsciiEncoder;
    #[cfg(feature = "png")]
    pub use crate::output::PngEncoder;
    #[cfg(feature = "std")]
    pub use crate::sink::PixelLog;
    pub use crate::sink::{FnSink, PixelSink};
}
