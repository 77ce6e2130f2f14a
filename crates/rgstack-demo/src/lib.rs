#![forbid(unsafe_code)]

//! Scripted replay of drag gestures against a sample RGStack deck.
//!
//! The binary builds a deck of colored demo cards, feeds a script of drag
//! events through a [`StackDriver`](rgstack::StackDriver), and prints every
//! presented frame as text or JSON lines.

pub mod card;
pub mod cli;
pub mod error;
pub mod presenter;
pub mod script;

pub use cli::{Cli, run, run_from_env};
pub use error::{DemoError, Result};
