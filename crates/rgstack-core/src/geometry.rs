#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are logical points in `f64`, origin at the top-left of the
//! stack container, y growing downward.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A width/height pair for card frames and container bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// The empty size. Hidden cards are framed with this.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An offset from the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Accumulated drag translation since the gesture began.
///
/// Matches what platform drag recognizers report: a signed delta, not a
/// position. Only `height` drives the stack; `width` is carried so hosts can
/// forward raw gesture values untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Translation {
    /// Horizontal delta.
    pub width: f64,
    /// Vertical delta. Negative when the finger moves up.
    pub height: f64,
}

impl Translation {
    /// No movement.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new translation.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A purely vertical translation.
    #[inline]
    pub const fn vertical(height: f64) -> Self {
        Self::new(0.0, height)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Translation {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}
