#![forbid(unsafe_code)]

//! The four rendering slots and the position each one holds.
//!
//! Slots never move; cards do. Advancing the deck rotates the positions
//! across the slots so that the card leaving through the back re-enters
//! from below, which keeps each slot bound to a stable view identity.
//!
//! # Canonical tuples
//!
//! - index 0: `[Front, Bottom, Off, Off]`
//! - index 1: `[Back, Front, Bottom, Off]`
//! - index ≥ 2: the previous tuple rotated right (moving next) or left
//!   (moving back).
//!
//! For every index ≥ 1 the tuple equals [`Slots::INDEX1`] rotated right
//! `index - 1` times.

use std::ops::Index;

use crate::movement::{Direction, Movement};
use crate::position::Position;

/// Number of rendered slots.
pub const SLOT_COUNT: usize = 4;

/// Position held by each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slots([Position; SLOT_COUNT]);

impl Default for Slots {
    fn default() -> Self {
        Self::INDEX0
    }
}

impl Slots {
    /// Assignment when the first card is in front.
    pub const INDEX0: Self = Self([
        Position::Front,
        Position::Bottom,
        Position::Off,
        Position::Off,
    ]);

    /// Assignment when the second card is in front.
    pub const INDEX1: Self = Self([
        Position::Back,
        Position::Front,
        Position::Bottom,
        Position::Off,
    ]);

    /// Wrap an explicit assignment.
    #[inline]
    #[must_use]
    pub const fn new(positions: [Position; SLOT_COUNT]) -> Self {
        Self(positions)
    }

    /// Underlying positions, slot 0 first.
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[Position; SLOT_COUNT] {
        &self.0
    }

    /// Rotate right: the last slot's position wraps to slot 0.
    #[must_use]
    pub const fn right_shift(self) -> Self {
        let [a, b, c, d] = self.0;
        Self([d, a, b, c])
    }

    /// Rotate left: slot 0's position wraps to the last slot.
    #[must_use]
    pub const fn left_shift(self) -> Self {
        let [a, b, c, d] = self.0;
        Self([b, c, d, a])
    }

    /// Assignment after moving to `index` in `direction` from `self`.
    ///
    /// Indices 0 and 1 always resolve to their canonical tuples; deeper
    /// indices rotate the previous assignment.
    #[must_use]
    pub const fn updated(self, index: usize, direction: Direction) -> Self {
        match index {
            0 => Self::INDEX0,
            1 => Self::INDEX1,
            _ => match direction {
                Direction::Next => self.right_shift(),
                Direction::Back => self.left_shift(),
            },
        }
    }

    /// Canonical assignment for `index`, computed without history.
    #[must_use]
    pub fn canonical(index: usize) -> Self {
        if index == 0 {
            return Self::INDEX0;
        }
        let mut slots = Self::INDEX1;
        for _ in 0..(index - 1) % SLOT_COUNT {
            slots = slots.right_shift();
        }
        slots
    }

    /// Project every slot through `movement`.
    #[must_use]
    pub fn projected(self, movement: &Movement) -> Self {
        self.map(|p| p.position_for(movement))
    }

    /// Apply `f` to every slot.
    #[must_use]
    pub fn map(self, f: impl FnMut(Position) -> Position) -> Self {
        Self(self.0.map(f))
    }

    /// Iterate positions, slot 0 first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }

    /// Whether no position occurs twice.
    #[must_use]
    pub fn is_distinct(&self) -> bool {
        Position::ALL
            .iter()
            .all(|p| self.0.iter().filter(|q| *q == p).count() <= 1)
    }

    /// Slot currently holding `position`, if exactly one does.
    #[must_use]
    pub fn slot_of(&self, position: Position) -> Option<usize> {
        let mut found = self.0.iter().enumerate().filter(|(_, p)| **p == position);
        match (found.next(), found.next()) {
            (Some((slot, _)), None) => Some(slot),
            _ => None,
        }
    }
}

impl Index<usize> for Slots {
    type Output = Position;

    fn index(&self, slot: usize) -> &Position {
        &self.0[slot]
    }
}

impl From<[Position; SLOT_COUNT]> for Slots {
    fn from(positions: [Position; SLOT_COUNT]) -> Self {
        Self(positions)
    }
}
