//! Output encoders (text, PNG).

mod ascii;
#[cfg(feature = "png")]
mod png_encoder;

pub use ascii::AsciiEncoder;
#[cfg(feature = "png")]
pub use png_encoder::PngEncoder;
