#![forbid(unsafe_code)]

//! Error types.
//!
//! Stack operations themselves never fail: out-of-range moves are no-ops
//! and out-of-range data lookups yield `None`. Errors only arise when a
//! stack is built or its configuration is loaded.

use thiserror::Error;

/// Errors raised while constructing an [`RgStack`](crate::RgStack).
#[derive(Debug, Error, PartialEq)]
pub enum StackError {
    /// The deck has no cards, so there is no valid index.
    #[error("card stack requires at least one card")]
    EmptyDeck,

    /// Card geometry failed validation.
    #[error("invalid card geometry: {}", .0.join("; "))]
    InvalidCardInfo(Vec<String>),

    /// A [`StackConfig`](crate::StackConfig) or threshold failed validation.
    #[error("invalid stack configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
}

/// Errors raised while loading a [`StackConfig`](crate::StackConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed values are out of range.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
