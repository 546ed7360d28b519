//! Configuration system for the focus-flash animation engine.
//!
//! This crate provides the configuration types consumed by the flash
//! controller. It includes:
//!
//! - `FlashConfig` with serde support and per-field defaults
//! - Default value functions usable as `#[serde(default = "...")]` targets
//! - Semantic validation with typed error variants
//!
//! Loading and saving configuration files is deliberately left to the host
//! application; this crate only defines the types and their validation
//! rules.

pub mod config;
pub mod defaults;
pub mod error;

// Re-export main types for convenience
pub use config::FlashConfig;
pub use error::ConfigError;
