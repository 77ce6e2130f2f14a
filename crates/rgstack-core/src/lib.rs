#![forbid(unsafe_code)]

//! Core: positions, transitions, movement, and layout for the RGStack card stack.
//!
//! # Role in RGStack
//! `rgstack-core` is the pure model layer. It owns the geometry primitives,
//! the four-position transition table, the drag movement classifier, the
//! per-position layouts and their interpolation, and the spring curve handed
//! to whatever view layer composites the cards.
//!
//! # Primary responsibilities
//! - **Position / Transition**: the closed next/previous table between
//!   `Back`, `Front`, `Bottom`, and `Off`, including which edges snap.
//! - **Movement**: signed drag value to forward/backward/none.
//! - **Layout**: rest geometry per position and interpolation under drag.
//! - **Slots**: the four-entry ring of positions with explicit shifts.
//! - **Spring**: the animation curve for committed transitions.
//!
//! # How it fits in the system
//! The `rgstack` crate owns the stateful stack machine and consumes these
//! types. Nothing here allocates, logs, or performs I/O.

pub mod geometry;
pub mod history;
pub mod interpolate;
pub mod layout;
pub mod movement;
pub mod position;
pub mod slots;
pub mod spring;

pub use geometry::{Point, Size, Translation};
pub use history::Tracked;
pub use interpolate::Interpolate;
pub use layout::{CardInfo, Layout};
pub use movement::{Direction, Movement};
pub use position::{Position, Transition};
pub use slots::{SLOT_COUNT, Slots};
pub use spring::{LayoutAnimator, Spring, SpringCurve};
