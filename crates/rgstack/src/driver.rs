#![forbid(unsafe_code)]

//! Event-driven wrapper that pushes every frame to a presenter.
//!
//! [`RgStack`] is passive: callers mutate it, then ask for a configuration.
//! [`StackDriver`] closes that loop. Each [`DragEvent`] and each explicit
//! [`move_to`](StackDriver::move_to) mutates the stack, recomputes the
//! configuration, and hands it to the [`Presenter`] before returning.
//!
//! # Invariants
//!
//! 1. Exactly one `present` call per handled event or move, including
//!    rejected moves and idle releases.
//! 2. The presenter always sees the configuration of the stack as it is
//!    after the mutation.

use rgstack_core::Direction;

use crate::card::StackConfiguration;
use crate::feedback::{NoFeedback, TransitionFeedback};
use crate::gesture::DragEvent;
use crate::stack::{DragOutcome, RgStack};

/// Receives each recomputed frame.
pub trait Presenter<D> {
    /// Show `configuration`, slot 0 first.
    fn present(&mut self, configuration: &StackConfiguration<'_, D>);
}

impl<D, P: Presenter<D> + ?Sized> Presenter<D> for &mut P {
    fn present(&mut self, configuration: &StackConfiguration<'_, D>) {
        (**self).present(configuration);
    }
}

/// A stack wired to a presenter and a feedback sink.
#[derive(Debug)]
pub struct StackDriver<D, P, F = NoFeedback> {
    stack: RgStack<D>,
    presenter: P,
    feedback: F,
}

impl<D, P: Presenter<D>> StackDriver<D, P, NoFeedback> {
    /// Drive `stack` without transition feedback.
    pub fn new(stack: RgStack<D>, presenter: P) -> Self {
        Self::with_feedback(stack, presenter, NoFeedback)
    }
}

impl<D, P: Presenter<D>, F: TransitionFeedback> StackDriver<D, P, F> {
    /// Drive `stack`, notifying `feedback` on every committed release.
    pub fn with_feedback(stack: RgStack<D>, presenter: P, feedback: F) -> Self {
        Self {
            stack,
            presenter,
            feedback,
        }
    }

    /// Apply one gesture event and present the result.
    ///
    /// Returns the release outcome for [`DragEvent::Ended`], `None`
    /// otherwise.
    pub fn handle(&mut self, event: DragEvent) -> Option<DragOutcome> {
        let outcome = match event {
            DragEvent::Appeared => {
                self.stack.set_drag(0.0);
                None
            }
            DragEvent::Changed(translation) => {
                self.stack.update_drag(translation);
                None
            }
            DragEvent::Ended(translation) => {
                Some(self.stack.end_drag(translation, &mut self.feedback))
            }
        };
        tracing::debug!(
            message = "rgstack.driver.event",
            event = event.name(),
            outcome = ?outcome,
            index = self.stack.index()
        );
        self.refresh();
        outcome
    }

    /// Move one card programmatically and present the result.
    pub fn move_to(&mut self, direction: Direction) -> bool {
        let moved = self.stack.move_to(direction);
        tracing::debug!(
            message = "rgstack.driver.move",
            direction = ?direction,
            moved,
            index = self.stack.index()
        );
        self.refresh();
        moved
    }

    /// Present the current configuration again.
    pub fn refresh(&mut self) {
        let configuration = self.stack.configuration();
        self.presenter.present(&configuration);
    }

    /// The driven stack.
    #[must_use]
    pub fn stack(&self) -> &RgStack<D> {
        &self.stack
    }

    /// The presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The feedback sink.
    #[must_use]
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Take the driver apart.
    pub fn into_parts(self) -> (RgStack<D>, P, F) {
        (self.stack, self.presenter, self.feedback)
    }
}
