#![forbid(unsafe_code)]

//! Card geometry and per-position layouts.
//!
//! [`CardInfo`] is the fixed geometry of one stack instance. [`Layout`] is
//! the render input for one card: at rest it depends only on the card's
//! [`Position`]; under drag it blends toward the neighbouring position's
//! rest layout.
//!
//! # Rest layouts
//!
//! | position | offset          | scale            | z   |
//! |----------|-----------------|------------------|-----|
//! | `Back`   | `(0, 0)`        | `min_scale`      | 1   |
//! | `Front`  | `(0, 0)`        | `1`              | 200 |
//! | `Bottom` | `(0, h + gap)`  | `1`              | 300 |
//! | `Off`    | `(0, 2h)`       | `1`              | 0   |
//!
//! Every rest layout uses the full card size and opacity `1`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size, Translation};
use crate::interpolate::Interpolate;
use crate::movement::Movement;
use crate::position::Position;

/// Default vertical gap between the front card and the bottom card.
pub const DEFAULT_GAP_DISTANCE: f64 = 50.0;

/// Default scale applied to the card sitting behind the front card.
pub const DEFAULT_MIN_SCALE_FOR_BACK_CARD: f64 = 0.8;

/// Default fraction of the bottom card left visible inside the container.
pub const DEFAULT_VISIBLE_FRACTION_OF_BOTTOM_CARD: f64 = 0.2;

/// Fixed geometry of a stack instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardInfo {
    /// Frame of every card.
    pub size: Size,
    /// Gap between the front card and the bottom card.
    pub gap_distance: f64,
    /// Scale of the back card, in `(0, 1]`.
    pub min_scale_for_back_card: f64,
    /// Visible fraction of the bottom card. Only affects the container size.
    pub visible_fraction_of_bottom_card: f64,
}

impl Default for CardInfo {
    fn default() -> Self {
        Self::new(Size::new(320.0, 480.0))
    }
}

impl CardInfo {
    /// Card geometry with default gap, back-card scale, and bottom fraction.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            gap_distance: DEFAULT_GAP_DISTANCE,
            min_scale_for_back_card: DEFAULT_MIN_SCALE_FOR_BACK_CARD,
            visible_fraction_of_bottom_card: DEFAULT_VISIBLE_FRACTION_OF_BOTTOM_CARD,
        }
    }

    /// Set the gap distance (builder pattern).
    #[must_use]
    pub const fn with_gap_distance(mut self, gap: f64) -> Self {
        self.gap_distance = gap;
        self
    }

    /// Set the back-card scale (builder pattern).
    #[must_use]
    pub const fn with_min_scale_for_back_card(mut self, scale: f64) -> Self {
        self.min_scale_for_back_card = scale;
        self
    }

    /// Set the visible fraction of the bottom card (builder pattern).
    #[must_use]
    pub const fn with_visible_fraction_of_bottom_card(mut self, fraction: f64) -> Self {
        self.visible_fraction_of_bottom_card = fraction;
        self
    }

    /// Distance a drag must cover to move one full card.
    #[inline]
    #[must_use]
    pub fn travel_distance(&self) -> f64 {
        self.size.height + self.gap_distance
    }

    /// Normalize a drag translation into a signed card count.
    ///
    /// Dragging up (negative `height`) yields a positive, forward value.
    #[inline]
    #[must_use]
    pub fn variance(&self, translation: Translation) -> f64 {
        -(translation.height / self.travel_distance())
    }

    /// Size of the container that hosts the stack: the front card, the gap,
    /// and the visible part of the bottom card.
    #[must_use]
    pub fn container_size(&self) -> Size {
        let height = (1.0 + self.visible_fraction_of_bottom_card) * self.size.height
            + self.gap_distance;
        Size::new(self.size.width, height)
    }

    /// Validate the geometry.
    ///
    /// Returns a list of validation errors. An empty list means the geometry
    /// is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.size.width.is_finite() && self.size.width > 0.0) {
            errors.push(format!("card.size.width must be > 0, got {}", self.size.width));
        }
        if !(self.size.height.is_finite() && self.size.height > 0.0) {
            errors.push(format!(
                "card.size.height must be > 0, got {}",
                self.size.height
            ));
        }
        if !(self.gap_distance.is_finite() && self.gap_distance >= 0.0) {
            errors.push(format!(
                "card.gap_distance must be >= 0, got {}",
                self.gap_distance
            ));
        }
        if !(self.min_scale_for_back_card > 0.0 && self.min_scale_for_back_card <= 1.0) {
            errors.push(format!(
                "card.min_scale_for_back_card must be in (0, 1], got {}",
                self.min_scale_for_back_card
            ));
        }
        if !(self.visible_fraction_of_bottom_card.is_finite()
            && self.visible_fraction_of_bottom_card >= 0.0)
        {
            errors.push(format!(
                "card.visible_fraction_of_bottom_card must be >= 0, got {}",
                self.visible_fraction_of_bottom_card
            ));
        }

        errors
    }
}

/// Render parameters for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Card frame. Zero for clipped cards.
    pub size: Size,
    /// Offset from the container origin.
    pub offset: Point,
    /// Uniform scale around the card center.
    pub scale: f64,
    /// Stacking order; higher draws on top.
    pub z_index: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the view layer should animate into this layout.
    pub animated: bool,
}

impl Layout {
    /// Rest layout of `position`.
    #[must_use]
    pub fn rest(position: Position, info: &CardInfo) -> Self {
        let size = info.size;
        let (offset, scale, z_index) = match position {
            Position::Back => (Point::ZERO, info.min_scale_for_back_card, 1.0),
            Position::Bottom => (Point::new(0.0, size.height + info.gap_distance), 1.0, 300.0),
            Position::Front => (Point::ZERO, 1.0, 200.0),
            Position::Off => (Point::new(0.0, size.height * 2.0), 1.0, 0.0),
        };
        Self {
            size,
            offset,
            scale,
            z_index,
            opacity: 1.0,
            animated: false,
        }
    }

    /// Layout of `position` while `movement` is in progress.
    ///
    /// Blends the rest layout toward the rest layout of the neighbour the
    /// movement heads to. Snapping edges jump fully at the first instant of
    /// drag.
    #[must_use]
    pub fn dynamic(position: Position, movement: &Movement, info: &CardInfo) -> Self {
        let current = Self::rest(position, info);
        match position.transition_for(movement) {
            None => current,
            Some(transition) => {
                let target = Self::rest(transition.position, info);
                current.interpolate(&target, transition.progress(movement.progress()))
            }
        }
    }

    /// Copy with a different frame size. The copy is not animated.
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        Self {
            size,
            animated: false,
            ..self
        }
    }

    /// Copy collapsed to zero size and not animated.
    #[must_use]
    pub fn hidden(self) -> Self {
        self.with_size(Size::ZERO)
    }

    /// Whether the card occupies no area.
    #[inline]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.size.is_empty()
    }
}

impl Interpolate for Layout {
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        Self {
            size: self.size.interpolate(&to.size, progress),
            offset: self.offset.interpolate(&to.offset, progress),
            scale: self.scale.interpolate(&to.scale, progress),
            z_index: self.z_index.interpolate(&to.z_index, progress),
            opacity: self.opacity.interpolate(&to.opacity, progress),
            animated: false,
        }
    }
}
