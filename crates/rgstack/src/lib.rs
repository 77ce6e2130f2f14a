#![forbid(unsafe_code)]

//! RGStack: a drag-navigable stack of cards.
//!
//! # Role in RGStack
//! `rgstack` owns the stateful part of the control. It tracks which card is
//! in front, which position each of the four slots holds, and the last two
//! drag values, and turns that into one [`CardConfiguration`] per slot each
//! frame.
//!
//! # Primary responsibilities
//! - **RgStack**: the state machine; drag updates, release decisions, moves.
//! - **Card**: per-slot output and the [`ConfigurableCard`] renderer hook.
//! - **StackDriver**: feeds [`DragEvent`]s in and pushes frames to a
//!   [`Presenter`].
//! - **StackConfig**: geometry, threshold, and animation curve from
//!   TOML or JSON.
//!
//! # Example
//! ```
//! use rgstack::{CardInfo, Direction, NoFeedback, RgStack, Size, Translation};
//!
//! let info = CardInfo::new(Size::new(300.0, 400.0));
//! let mut stack = RgStack::new(vec!["one", "two", "three"], info).unwrap();
//!
//! stack.update_drag(Translation::vertical(-200.0));
//! stack.end_drag(Translation::vertical(-200.0), &mut NoFeedback);
//! assert_eq!(stack.index(), 1);
//!
//! let frame = stack.configuration();
//! assert_eq!(frame[1].data, Some(&"two"));
//! assert!(stack.move_to(Direction::Back));
//! ```

pub mod card;
pub mod config;
pub mod driver;
pub mod error;
pub mod feedback;
pub mod gesture;
pub mod stack;

pub use card::{
    CardConfiguration, ConfigurableCard, PlacedCard, StackConfiguration, place_card, place_cards,
};
pub use config::{DEFAULT_SNAP_THRESHOLD, StackConfig};
pub use driver::{Presenter, StackDriver};
pub use error::{ConfigError, StackError};
pub use feedback::{NoFeedback, RecordingFeedback, TransitionFeedback};
pub use gesture::DragEvent;
pub use stack::{DragOutcome, RgStack};

pub use rgstack_core::{
    CardInfo, Direction, Interpolate, Layout, LayoutAnimator, Movement, Point, Position, SLOT_COUNT,
    Size, Slots, Spring, SpringCurve, Tracked, Transition, Translation,
};
