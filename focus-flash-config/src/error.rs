//! Typed error variants for the focus-flash-config crate.
//!
//! Provides structured error types for config validation so callers can
//! match on specific failure modes instead of opaque strings.

use thiserror::Error;

/// Errors produced by `FlashConfig::validate`.
///
/// Covers the failure categories a caller may want to distinguish:
/// - semantic validation of numeric fields
/// - exclusion patterns that are not valid regexes
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),

    /// An exclusion pattern could not be compiled as a regex.
    #[error("Invalid exclusion pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern as written in the config.
        pattern: String,
        /// Underlying regex compile error.
        #[source]
        source: regex::Error,
    },
}
