#![forbid(unsafe_code)]

//! Host feedback when a drag commits a move.
//!
//! Hosts typically fire a haptic tick here. The call is fire-and-forget:
//! the stack does not wait on it and ignores whatever the host does.

use rgstack_core::Direction;

/// Receives a notification each time a released drag crosses the snap
/// threshold.
///
/// The notification precedes the move itself, so it also fires when the
/// move is then rejected at either end of the deck.
pub trait TransitionFeedback {
    /// A release crossed the threshold heading in `direction`.
    fn notify_transition_committed(&mut self, direction: Direction);
}

/// Feedback sink that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl TransitionFeedback for NoFeedback {
    fn notify_transition_committed(&mut self, _direction: Direction) {}
}

/// Feedback sink that records every notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingFeedback {
    committed: Vec<Direction>,
}

impl RecordingFeedback {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directions notified so far, oldest first.
    #[must_use]
    pub fn committed(&self) -> &[Direction] {
        &self.committed
    }

    /// Number of notifications so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.committed.len()
    }
}

impl TransitionFeedback for RecordingFeedback {
    fn notify_transition_committed(&mut self, direction: Direction) {
        self.committed.push(direction);
    }
}

impl<F: TransitionFeedback + ?Sized> TransitionFeedback for &mut F {
    fn notify_transition_committed(&mut self, direction: Direction) {
        (**self).notify_transition_committed(direction);
    }
}
