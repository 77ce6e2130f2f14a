#![forbid(unsafe_code)]

//! Gesture input.

use rgstack_core::Translation;

/// One input event for a [`StackDriver`](crate::StackDriver).
///
/// Translations are the cumulative offset of the pan since it began, in
/// points, with negative `height` pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The hosting view appeared; the drag resets to zero.
    Appeared,
    /// The pan moved.
    Changed(Translation),
    /// The pan was released.
    Ended(Translation),
}

impl DragEvent {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Appeared => "appeared",
            Self::Changed(_) => "changed",
            Self::Ended(_) => "ended",
        }
    }

    /// Translation carried by the event, if any.
    #[must_use]
    pub const fn translation(&self) -> Option<Translation> {
        match self {
            Self::Appeared => None,
            Self::Changed(t) | Self::Ended(t) => Some(*t),
        }
    }
}
