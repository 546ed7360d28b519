//! Color math for the focus flash.
//!
//! Windows report their background in 16-bit-per-channel RGB (0-65535, the
//! resolution editor hosts expose for faces/presentation colors). The flash
//! shifts each channel by a brightness amount expressed on the familiar
//! 8-bit 0-255 scale, then narrows back to 8 bits per channel when
//! producing the display color string handed to the host.
//!
//! Everything here is pure and stateless.

/// A color with 16-bit channels (0-65535 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb {
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Format as a `#rrggbb` display color string.
    ///
    /// Each 16-bit channel is narrowed to 8 bits by truncating division by
    /// 256 (e.g. channel 15400 -> 60 -> `3c`), matching how hosts quantise
    /// high-resolution face colors for display.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.r / 256,
            self.g / 256,
            self.b / 256
        )
    }
}

/// Which way the flash shifts the background, derived from the active theme.
///
/// Dark themes flash brighter (the only direction with headroom on a dark
/// background); light themes flash darker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashDirection {
    Lighten,
    Darken,
}

impl FlashDirection {
    /// Classify the shift direction for a theme.
    pub fn for_dark_theme(dark: bool) -> Self {
        if dark {
            FlashDirection::Lighten
        } else {
            FlashDirection::Darken
        }
    }

    /// Signed unit for channel arithmetic: +1 to lighten, -1 to darken.
    pub fn signum(&self) -> i32 {
        match self {
            FlashDirection::Lighten => 1,
            FlashDirection::Darken => -1,
        }
    }
}

/// Shift every channel of `color` by `shift_units` in `direction`.
///
/// `shift_units` is on the 0-255 brightness scale; multiplying by 256 maps
/// it onto the 16-bit channel scale. Results saturate into [0, 65535];
/// shifting never wraps and never fails.
pub fn shift_color(color: Rgb, shift_units: u8, direction: FlashDirection) -> Rgb {
    let delta = direction.signum() * i32::from(shift_units) * 256;
    let shift = |channel: u16| -> u16 { (i32::from(channel) + delta).clamp(0, 65535) as u16 };
    Rgb::new(shift(color.r), shift(color.g), shift(color.b))
}
