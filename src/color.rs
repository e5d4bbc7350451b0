//! Color types for pixel sinks.
//!
//! The rasterizers are generic over [`PixelColor`]: any small `Copy`
//! value with a distinguished transparent sentinel. Two implementations
//! ship with the crate, 8-bit [`Rgba`] and 1-bit [`Monochrome`].

/// A color a pixel sink can accept.
///
/// `TRANSPARENT` means "paint nothing". Shapes compare against it to
/// decide whether optional parts (such as a circle's fill) are drawn.
pub trait PixelColor: Copy + PartialEq {
    /// The transparent sentinel.
    const TRANSPARENT: Self;

    /// Default foreground color for newly constructed shapes.
    const BLACK: Self;

    /// Whether this color is the transparent sentinel.
    #[inline]
    fn is_transparent(self) -> bool {
        self == Self::TRANSPARENT
    }
}

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Complementary color with the same alpha.
    ///
    /// Transparent stays transparent.
    #[must_use]
    pub const fn inverse(self) -> Self {
        if self.a == 0 && self.r == 0 && self.g == 0 && self.b == 0 {
            return self;
        }
        Self::new(255 - self.r, 255 - self.g, 255 - self.b, self.a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl PixelColor for Rgba {
    const TRANSPARENT: Self = Rgba::TRANSPARENT;
    const BLACK: Self = Rgba::BLACK;
}

/// Color of a 1-bit display.
///
/// `Black` is ink (a lit pixel on most monochrome panels), `White` is
/// paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Monochrome {
    /// Ink.
    Black,
    /// Paper.
    White,
    /// Paint nothing.
    #[default]
    Transparent,
}

impl Monochrome {
    /// Swap ink and paper. Transparent stays transparent.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
            Self::Transparent => Self::Transparent,
        }
    }
}

impl PixelColor for Monochrome {
    const TRANSPARENT: Self = Monochrome::Transparent;
    const BLACK: Self = Monochrome::Black;
}

impl From<bool> for Monochrome {
    /// `true` is ink.
    fn from(lit: bool) -> Self {
        if lit {
            Self::Black
        } else {
            Self::White
        }
    }
}
