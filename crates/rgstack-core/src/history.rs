#![forbid(unsafe_code)]

//! One-step value history.

/// A value together with the value it replaced.
///
/// The stack keeps drags and slot assignments in this form so that a frame
/// can compare against the previous one without an observer hook.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tracked<T> {
    /// Value before the most recent [`push`](Tracked::push).
    pub last: T,
    /// Current value.
    pub current: T,
}

impl<T: Copy> Tracked<T> {
    /// Start with `value` as both last and current.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            last: value,
            current: value,
        }
    }

    /// Replace the current value, remembering the old one.
    pub fn push(&mut self, value: T) {
        self.last = self.current;
        self.current = value;
    }

    /// Push the current value again, so `last == current` afterwards.
    pub fn refresh(&mut self) {
        self.push(self.current);
    }
}

impl<T: Copy + PartialEq> Tracked<T> {
    /// Whether the most recent push changed the value.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.last != self.current
    }
}
