#![forbid(unsafe_code)]

//! Linear interpolation between two values of the same kind.
//!
//! # Invariants
//!
//! 1. `a.interpolate(&b, 0.0)` returns `a` bit-for-bit, never
//!    `a + (b - a) * 0.0`.
//! 2. `a.interpolate(&b, 1.0) == b` up to float rounding.
//! 3. No clamping: progress outside `[0, 1]` extrapolates.

use crate::geometry::{Point, Size};

/// Blend from `self` toward `to` by `progress`.
pub trait Interpolate: Sized {
    /// Interpolate toward `to`. `progress == 0.0` yields `self` unchanged.
    #[must_use]
    fn interpolate(&self, to: &Self, progress: f64) -> Self;
}

/// Scalar interpolation: `from + (to - from) * progress`.
#[inline]
#[must_use]
pub fn interpolate(from: f64, to: f64, progress: f64) -> f64 {
    if progress == 0.0 {
        return from;
    }
    (to - from) * progress + from
}

impl Interpolate for f64 {
    #[inline]
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        interpolate(*self, *to, progress)
    }
}

impl Interpolate for Point {
    #[inline]
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        Self::new(
            interpolate(self.x, to.x, progress),
            interpolate(self.y, to.y, progress),
        )
    }
}

impl Interpolate for Size {
    #[inline]
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        Self::new(
            interpolate(self.width, to.width, progress),
            interpolate(self.height, to.height, progress),
        )
    }
}
