//! Presentation settings for the redeem flow.
//!
//! Every field has a serde default, so hosts only send what they restyle.
use crate::constants::{
    DEFAULT_ACTIVE_CLASS, DEFAULT_BADGE_DISPLAY, DEFAULT_HEADER_BASE_CLASS,
    DEFAULT_POINTS_SUFFIX, DEFAULT_REDEEM_PATH_PREFIX, DEFAULT_TRIGGER_CLASS, DISABLED_CURSOR,
    DISABLED_OPACITY, ENABLED_CURSOR, ENABLED_OPACITY,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inline style applied to the confirm button for one affordability state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub opacity: String,
    pub cursor: String,
}

impl ButtonStyle {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            opacity: ENABLED_OPACITY.to_string(),
            cursor: ENABLED_CURSOR.to_string(),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            opacity: DISABLED_OPACITY.to_string(),
            cursor: DISABLED_CURSOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsConfig {
    /// Form action prefix; the reward id and a trailing slash are appended.
    #[serde(default = "RewardsConfig::default_redeem_path_prefix")]
    pub redeem_path_prefix: String,
    #[serde(default = "RewardsConfig::default_points_suffix")]
    pub points_suffix: String,
    #[serde(default = "RewardsConfig::default_header_base_class")]
    pub header_base_class: String,
    #[serde(default = "RewardsConfig::default_active_class")]
    pub active_class: String,
    #[serde(default = "RewardsConfig::default_trigger_class")]
    pub trigger_class: String,
    /// `display` value for whichever badge is shown.
    #[serde(default = "RewardsConfig::default_badge_display")]
    pub badge_display: String,
    #[serde(default = "ButtonStyle::enabled")]
    pub enabled_style: ButtonStyle,
    #[serde(default = "ButtonStyle::disabled")]
    pub disabled_style: ButtonStyle,
}

impl RewardsConfig {
    fn default_redeem_path_prefix() -> String {
        DEFAULT_REDEEM_PATH_PREFIX.to_string()
    }

    fn default_points_suffix() -> String {
        DEFAULT_POINTS_SUFFIX.to_string()
    }

    fn default_header_base_class() -> String {
        DEFAULT_HEADER_BASE_CLASS.to_string()
    }

    fn default_active_class() -> String {
        DEFAULT_ACTIVE_CLASS.to_string()
    }

    fn default_trigger_class() -> String {
        DEFAULT_TRIGGER_CLASS.to_string()
    }

    fn default_badge_display() -> String {
        DEFAULT_BADGE_DISPLAY.to_string()
    }

    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and the validation
    /// errors of [`RewardsConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the controller relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.redeem_path_prefix.starts_with('/') || !self.redeem_path_prefix.ends_with('/') {
            return Err(ConfigError::PathPrefix {
                prefix: self.redeem_path_prefix.clone(),
            });
        }
        let class_fields = [
            ("header_base_class", &self.header_base_class),
            ("active_class", &self.active_class),
            ("trigger_class", &self.trigger_class),
            ("badge_display", &self.badge_display),
        ];
        for (field, value) in class_fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
            if value.contains(char::is_whitespace) {
                return Err(ConfigError::Whitespace {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Form action for a reward, e.g. `/redeem/4/`.
    #[must_use]
    pub fn redeem_path(&self, reward_id: &str) -> String {
        format!("{}{reward_id}/", self.redeem_path_prefix)
    }

    /// Full class list for the modal header; replaces any previous color.
    #[must_use]
    pub fn header_class(&self, color_class: &str) -> String {
        let color_class = color_class.trim();
        if color_class.is_empty() {
            self.header_base_class.clone()
        } else {
            format!("{} {color_class}", self.header_base_class)
        }
    }

    #[must_use]
    pub const fn button_style(&self, enabled: bool) -> &ButtonStyle {
        if enabled {
            &self.enabled_style
        } else {
            &self.disabled_style
        }
    }
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            redeem_path_prefix: Self::default_redeem_path_prefix(),
            points_suffix: Self::default_points_suffix(),
            header_base_class: Self::default_header_base_class(),
            active_class: Self::default_active_class(),
            trigger_class: Self::default_trigger_class(),
            badge_display: Self::default_badge_display(),
            enabled_style: ButtonStyle::enabled(),
            disabled_style: ButtonStyle::disabled(),
        }
    }
}

/// Errors raised when a config violates the controller's invariants.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("redeem path prefix {prefix:?} must start and end with '/'")]
    PathPrefix { prefix: String },
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must be a single token (got {value:?})")]
    Whitespace { field: &'static str, value: String },
}
