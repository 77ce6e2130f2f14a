#![forbid(unsafe_code)]

//! Stack configuration as data.
//!
//! Captures card geometry, the snap threshold, and the animation curve in a
//! single [`StackConfig`] that can be loaded from TOML or JSON. Every field
//! has a default, so a partial file only overrides what it names.
//!
//! ```toml
//! # rgstack.toml
//! snap_threshold = 0.25
//!
//! [card]
//! size = { width = 320.0, height = 480.0 }
//! gap_distance = 30.0
//!
//! [animation]
//! response = 0.3
//! ```
//!
//! ```rust,ignore
//! let config = StackConfig::from_toml_file("rgstack.toml")?;
//! let stack = RgStack::from_config(cards, &config)?;
//! ```

use std::path::Path;

use rgstack_core::{CardInfo, SpringCurve};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Normalized drag distance a release must exceed to commit a move.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 0.2;

/// Tunable parameters of a card stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Card geometry.
    pub card: CardInfo,
    /// Release threshold, in card travel distances.
    pub snap_threshold: f64,
    /// Curve for animated transitions.
    pub animation: SpringCurve,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            card: CardInfo::default(),
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            animation: SpringCurve::default(),
        }
    }
}

impl StackConfig {
    /// Config with the given card geometry and default everything else.
    #[must_use]
    pub fn with_card(card: CardInfo) -> Self {
        Self {
            card,
            ..Self::default()
        }
    }

    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)?.validated()
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)?.validated()
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load from a file, picking the format from its extension.
    ///
    /// `.json` is parsed as JSON; anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Serialize to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.card.validate();
        errors.extend(snap_threshold_error(self.snap_threshold));
        errors.extend(self.animation.validate());
        errors
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// The message for a release threshold that is negative or not finite.
pub(crate) fn snap_threshold_error(threshold: f64) -> Option<String> {
    (!(threshold.is_finite() && threshold >= 0.0))
        .then(|| format!("snap_threshold must be >= 0, got {threshold}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgstack_core::Size;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        let config = StackConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, StackConfig::default());
    }

    #[test]
    fn partial_toml_overrides_named_fields() {
        let config = StackConfig::from_toml_str(
            r#"
            snap_threshold = 0.3

            [card]
            size = { width = 200.0, height = 300.0 }
            gap_distance = 30.0

            [animation]
            response = 0.4
            "#,
        )
        .expect("partial config");
        assert_eq!(config.snap_threshold, 0.3);
        assert_eq!(config.card.size, Size::new(200.0, 300.0));
        assert_eq!(config.card.gap_distance, 30.0);
        assert_eq!(config.card.min_scale_for_back_card, 0.8);
        assert_eq!(config.animation.response, 0.4);
        assert_eq!(config.animation.damping_fraction, 0.75);
    }

    #[test]
    fn json_roundtrips_through_loader() {
        let config = StackConfig::from_json_str(
            r#"{ "card": { "min_scale_for_back_card": 0.9 }, "snap_threshold": 0.1 }"#,
        )
        .expect("json config");
        assert_eq!(config.card.min_scale_for_back_card, 0.9);
        assert_eq!(config.snap_threshold, 0.1);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = StackConfig::from_toml_str(
            r#"
            snap_threshold = -1.0
            [card]
            min_scale_for_back_card = 0.0
            "#,
        )
        .expect_err("invalid config");
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 2, "{errors:?}");
                assert!(errors.iter().any(|e| e.starts_with("snap_threshold")));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn malformed_input_reports_parser() {
        assert!(matches!(
            StackConfig::from_toml_str("snap_threshold = ["),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            StackConfig::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn files_load_by_extension() {
        let dir = tempfile::tempdir().expect("tempdir");

        let toml_path = dir.path().join("stack.toml");
        let mut file = std::fs::File::create(&toml_path).expect("create toml");
        writeln!(file, "snap_threshold = 0.35").expect("write toml");
        assert_eq!(
            StackConfig::from_file(&toml_path).expect("toml file").snap_threshold,
            0.35
        );

        let json_path = dir.path().join("stack.json");
        std::fs::write(&json_path, r#"{ "snap_threshold": 0.15 }"#).expect("write json");
        assert_eq!(
            StackConfig::from_file(&json_path).expect("json file").snap_threshold,
            0.15
        );

        assert!(matches!(
            StackConfig::from_file(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn toml_output_loads_back() {
        let config = StackConfig::with_card(CardInfo::new(Size::new(100.0, 150.0)));
        let text = config.to_toml_string().expect("serialize");
        assert_eq!(StackConfig::from_toml_str(&text).expect("reload"), config);
    }
}
