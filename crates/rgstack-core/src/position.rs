#![forbid(unsafe_code)]

//! Card positions and the transition table between them.
//!
//! Each [`Position`] has exactly one `next` transition (taken on forward
//! drags) and one `previous` transition (taken on backward drags):
//!
//! | position | previous          | next            |
//! |----------|-------------------|-----------------|
//! | `Back`   | `Front`           | `Off` (snap)    |
//! | `Front`  | `Bottom`          | `Back`          |
//! | `Bottom` | `Off`             | `Front`         |
//! | `Off`    | `Back` (snap)     | `Bottom`        |
//!
//! # Invariants
//!
//! 1. `p.next_position().previous_position() == p` for every position, and
//!    symmetrically for `previous`.
//! 2. Following `next` four times from any position returns to it.
//! 3. An edge and its reverse agree on whether they are interpolated.

use crate::movement::Movement;

/// The role a card plays in the visible stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Behind the front card, scaled down.
    Back,
    /// The focused card.
    Front,
    /// Peeking out below the front card.
    Bottom,
    /// Below the container, not visible.
    Off,
}

/// An edge of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Destination position.
    pub position: Position,
    /// Whether layouts blend along this edge. Snapping edges jump to the
    /// destination as soon as any progress is made.
    pub interpolated: bool,
}

impl Transition {
    const fn to(position: Position) -> Self {
        Self {
            position,
            interpolated: true,
        }
    }

    const fn snap(position: Position) -> Self {
        Self {
            position,
            interpolated: false,
        }
    }

    /// Effective interpolation progress along this edge.
    ///
    /// Interpolated edges pass `raw` through; snapping edges are a step
    /// function (`1.0` once `raw > 0`, else `0.0`).
    #[inline]
    #[must_use]
    pub fn progress(&self, raw: f64) -> f64 {
        if self.interpolated {
            raw
        } else if raw > 0.0 {
            1.0
        } else {
            0.0
        }
    }
}

impl Position {
    /// All positions, in declaration order.
    pub const ALL: [Self; 4] = [Self::Back, Self::Front, Self::Bottom, Self::Off];

    /// `(previous, next)` transitions out of this position.
    #[must_use]
    pub const fn transition_neighbours(self) -> (Transition, Transition) {
        match self {
            Self::Back => (Transition::to(Self::Front), Transition::snap(Self::Off)),
            Self::Front => (Transition::to(Self::Bottom), Transition::to(Self::Back)),
            Self::Bottom => (Transition::to(Self::Off), Transition::to(Self::Front)),
            Self::Off => (Transition::snap(Self::Back), Transition::to(Self::Bottom)),
        }
    }

    /// Edge taken on a forward drag.
    #[inline]
    #[must_use]
    pub const fn next_transition(self) -> Transition {
        self.transition_neighbours().1
    }

    /// Edge taken on a backward drag.
    #[inline]
    #[must_use]
    pub const fn previous_transition(self) -> Transition {
        self.transition_neighbours().0
    }

    /// Destination of the forward edge.
    #[inline]
    #[must_use]
    pub const fn next_position(self) -> Self {
        self.next_transition().position
    }

    /// Destination of the backward edge.
    #[inline]
    #[must_use]
    pub const fn previous_position(self) -> Self {
        self.previous_transition().position
    }

    /// Edge selected by `movement`, or `None` at rest.
    #[must_use]
    pub const fn transition_for(self, movement: &Movement) -> Option<Transition> {
        match movement {
            Movement::Forward(_) => Some(self.next_transition()),
            Movement::Backward(_) => Some(self.previous_transition()),
            Movement::None => None,
        }
    }

    /// Position reached by following `movement`; `self` at rest.
    #[must_use]
    pub const fn position_for(self, movement: &Movement) -> Self {
        match self.transition_for(movement) {
            Some(transition) => transition.position,
            None => self,
        }
    }

    /// Whether a card moving from `self` to `to` should animate.
    ///
    /// True only when `to` is a direct neighbour reached over an
    /// interpolated edge. Staying put never animates.
    #[must_use]
    pub fn should_animate_transition(self, to: Self) -> bool {
        let (previous, next) = self.transition_neighbours();
        if to == next.position {
            next.interpolated
        } else if to == previous.position {
            previous.interpolated
        } else {
            false
        }
    }

    /// Offset from the current deck index to the data shown here.
    #[inline]
    #[must_use]
    pub const fn data_offset(self) -> isize {
        match self {
            Self::Back => -1,
            Self::Front => 0,
            Self::Bottom => 1,
            Self::Off => 2,
        }
    }
}
