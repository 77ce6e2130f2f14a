#![forbid(unsafe_code)]

//! Drag movement classification.
//!
//! The stack normalizes a vertical drag into a signed scalar where `1.0`
//! means one full card height plus gap. Dragging up is positive and moves
//! forward through the deck.

/// Direction of a committed move through the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher indices.
    Next,
    /// Toward lower indices.
    Back,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Next => Self::Back,
            Self::Back => Self::Next,
        }
    }

    /// Signed index step for this direction.
    #[inline]
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Back => -1,
        }
    }
}

/// Classified drag intent with its progress magnitude.
///
/// Progress is always non-negative; the sign lives in the variant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Movement {
    /// Dragging toward the next card.
    Forward(f64),
    /// Dragging toward the previous card.
    Backward(f64),
    /// At rest. NaN drags also land here.
    #[default]
    None,
}

impl Movement {
    /// Classify a signed drag value.
    #[must_use]
    pub fn from_drag(value: f64) -> Self {
        if value > 0.0 {
            Self::Forward(value)
        } else if value < 0.0 {
            Self::Backward(value.abs())
        } else {
            Self::None
        }
    }

    /// Whether this is a forward drag.
    #[inline]
    #[must_use]
    pub const fn is_forward(&self) -> bool {
        matches!(self, Self::Forward(_))
    }

    /// Whether this is a backward drag.
    #[inline]
    #[must_use]
    pub const fn is_backward(&self) -> bool {
        matches!(self, Self::Backward(_))
    }

    /// Whether a drag is in progress in either direction.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Progress magnitude, `0.0` at rest.
    #[inline]
    #[must_use]
    pub const fn progress(&self) -> f64 {
        match *self {
            Self::Forward(p) | Self::Backward(p) => p,
            Self::None => 0.0,
        }
    }

    /// The deck direction this movement heads toward.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Self::Forward(_) => Some(Direction::Next),
            Self::Backward(_) => Some(Direction::Back),
            Self::None => None,
        }
    }
}

impl From<f64> for Movement {
    fn from(value: f64) -> Self {
        Self::from_drag(value)
    }
}
