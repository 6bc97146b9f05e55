//! Lightness/saturation scaling and luma-based contrast.
//!
//! The adjust functions are multiplicative: the channel is multiplied by
//! `percent / 100`, rounded, then clamped to `0..=100`. A percent of 100
//! leaves the color unchanged up to HSL rounding.

use tracing::trace;

use super::hex::HexColor;
use super::hsl::{hsl_to_hex, Hsl};
use crate::error::ColorError;

/// Luma below this value counts as a dark background needing light text.
pub const DARK_BACKGROUND_THRESHOLD: f64 = 0.6;

/// Text color used on dark backgrounds.
pub const LIGHT_TEXT: HexColor = HexColor::from_rgb(0xff, 0xff, 0xff);

/// Text color used on light backgrounds.
pub const DARK_TEXT: HexColor = HexColor::from_rgb(0x0f, 0x17, 0x2a);

/// Scales a 0..=100 channel, clamping the result.
///
/// Infinite percents saturate to 0 or 100. A NaN product (NaN percent, or an
/// infinite percent on a zero channel) yields 0.
fn scale_percent(value: u8, percent: f64) -> f64 {
    let scaled = value as f64 * percent / 100.0;
    if scaled.is_nan() {
        return 0.0;
    }
    scaled.round().clamp(0.0, 100.0)
}

fn finite(percent: f64) -> Result<f64, ColorError> {
    if percent.is_finite() {
        Ok(percent)
    } else {
        Err(ColorError::invalid_percent(percent))
    }
}

impl HexColor {
    /// Scales HSL lightness by `percent / 100`.
    pub fn scale_lightness(&self, percent: f64) -> HexColor {
        let Hsl { h, s, l } = self.hsl();
        hsl_to_hex(h as f64, s as f64, scale_percent(l, percent))
    }

    /// Scales HSL saturation by `percent / 100`.
    pub fn scale_saturation(&self, percent: f64) -> HexColor {
        let Hsl { h, s, l } = self.hsl();
        hsl_to_hex(h as f64, scale_percent(s, percent), l as f64)
    }

    /// BT.601 luma in `0.0..=1.0`.
    ///
    /// This is a brightness proxy for contrast decisions, not CIE relative
    /// luminance.
    pub fn luminance(&self) -> f64 {
        let rgb = self.rgb();
        (0.299 * rgb.0 as f64 + 0.587 * rgb.1 as f64 + 0.114 * rgb.2 as f64) / 255.0
    }

    /// Whether text drawn on this color should be light.
    pub fn is_dark(&self) -> bool {
        self.luminance() < DARK_BACKGROUND_THRESHOLD
    }

    /// Picks [`LIGHT_TEXT`] or [`DARK_TEXT`] for readability on this background.
    pub fn contrast_text(&self) -> HexColor {
        if self.is_dark() {
            LIGHT_TEXT
        } else {
            DARK_TEXT
        }
    }
}

/// Parses `hex` and scales its lightness by `percent / 100`.
///
/// Fails on malformed hex and on a NaN or infinite `percent`.
pub fn adjust_lightness(hex: &str, percent: f64) -> Result<HexColor, ColorError> {
    let percent = finite(percent)?;
    let color = HexColor::parse(hex)?;
    let adjusted = color.scale_lightness(percent);
    trace!(input = %color, percent, output = %adjusted, "adjusted lightness");
    Ok(adjusted)
}

/// Parses `hex` and scales its saturation by `percent / 100`.
pub fn adjust_saturation(hex: &str, percent: f64) -> Result<HexColor, ColorError> {
    let percent = finite(percent)?;
    let color = HexColor::parse(hex)?;
    let adjusted = color.scale_saturation(percent);
    trace!(input = %color, percent, output = %adjusted, "adjusted saturation");
    Ok(adjusted)
}

/// Parses `hex` and returns its BT.601 luma.
pub fn luminance(hex: &str) -> Result<f64, ColorError> {
    HexColor::parse(hex).map(|c| c.luminance())
}
