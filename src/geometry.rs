//! Integer coordinates for pixel-addressable devices.
//!
//! All rasterization in this crate happens on `i32` pixel coordinates;
//! there is no floating point anywhere in the geometry.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A pixel coordinate (or an offset between two pixel coordinates).
///
/// `x` grows to the right and `y` grows downwards, as on most displays,
/// but nothing in the rasterizers depends on that orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Xy {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Xy {
    /// Origin (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the x and y components.
    ///
    /// Used by the line rasterizer to walk steep lines along y.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// `self + (dx, dy)`, or `None` if either component leaves the `i32`
    /// range.
    #[must_use]
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Component-wise addition clamped to the `i32` range.
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl From<(i32, i32)> for Xy {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Xy> for (i32, i32) {
    fn from(p: Xy) -> Self {
        (p.x, p.y)
    }
}

impl Add for Xy {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Xy {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Xy {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Xy {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Xy {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
