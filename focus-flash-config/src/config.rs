//! Flash animation configuration.
//!
//! `FlashConfig` describes how a focus flash looks and which windows it
//! skips. The struct is plain data: the engine reads it, the host decides
//! where it comes from (file, UI, hardcoded defaults).

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the focus-flash animation.
///
/// All fields have serde defaults, so a partial (or empty) document
/// deserializes into a usable config. Numeric fields are validated
/// separately via [`FlashConfig::validate`]; serde itself accepts any
/// well-typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashConfig {
    /// Peak channel shift magnitude at frame 0 (0-255 brightness scale).
    ///
    /// A value of 0 produces an invisible flash; the engine treats it as
    /// "do not flash".
    #[serde(default = "crate::defaults::brightness")]
    pub brightness: u8,

    /// Total animation length in seconds. Must be finite and positive.
    #[serde(default = "crate::defaults::duration")]
    pub duration: f64,

    /// Time between animation frames in seconds. Must be finite and
    /// positive. Durations shorter than two steps are clamped to a
    /// two-frame animation rather than rejected.
    #[serde(default = "crate::defaults::step_interval")]
    pub step_interval: f64,

    /// When true, focus changes into secondary/prompt-type windows
    /// (e.g. command prompts, popups) do not flash.
    #[serde(default = "crate::defaults::ignore_secondary_focus")]
    pub ignore_secondary_focus: bool,

    /// Regex patterns matched against a window's content identity.
    /// Any match suppresses the flash for that focus change.
    #[serde(default = "crate::defaults::excluded_content_patterns")]
    pub excluded_content_patterns: Vec<String>,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            brightness: crate::defaults::brightness(),
            duration: crate::defaults::duration(),
            step_interval: crate::defaults::step_interval(),
            ignore_secondary_focus: crate::defaults::ignore_secondary_focus(),
            excluded_content_patterns: crate::defaults::excluded_content_patterns(),
        }
    }
}

impl FlashConfig {
    /// Validate field values that serde cannot check on its own.
    ///
    /// Returns the first problem found:
    /// - `duration` and `step_interval` must be finite and greater than zero
    /// - every exclusion pattern must compile as a regex
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            )));
        }
        if !self.step_interval.is_finite() || self.step_interval <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "step_interval must be a positive number of seconds, got {}",
                self.step_interval
            )));
        }
        for pattern in &self.excluded_content_patterns {
            if let Err(e) = Regex::new(pattern) {
                return Err(ConfigError::Pattern {
                    pattern: pattern.clone(),
                    source: e,
                });
            }
        }
        Ok(())
    }
}
