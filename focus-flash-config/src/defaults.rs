//! Default value functions for configuration.
//!
//! Each `default_*`-style free function here is used as a
//! `#[serde(default = "crate::defaults::...")]` attribute on `FlashConfig`
//! fields, so a partial config file deserializes with sensible values for
//! every omitted field.

/// Peak channel shift magnitude at frame 0, on the 0-255 brightness scale.
pub fn brightness() -> u8 {
    20
}

/// Total animation length in seconds.
pub fn duration() -> f64 {
    0.6
}

/// Time between animation frames in seconds.
pub fn step_interval() -> f64 {
    0.05
}

/// Whether focus changes into secondary/prompt-type windows are ignored.
pub fn ignore_secondary_focus() -> bool {
    true
}

/// Content-identity patterns whose windows never flash.
pub fn excluded_content_patterns() -> Vec<String> {
    Vec::new()
}
