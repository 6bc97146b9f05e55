//! RGB ↔ HSL conversion.
//!
//! HSL values are integer-rounded: hue in degrees `0..360`, saturation and
//! lightness in percent `0..=100`. Going RGB → HSL → RGB therefore loses a
//! little precision; low-chroma colors come back within one step per
//! channel, saturated mid-lightness colors within a few.

use serde::{Deserialize, Serialize};

use super::hex::{HexColor, Rgb};

/// Hue/saturation/lightness, rounded to whole degrees and percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0–359).
    pub h: u16,
    /// Saturation percentage (0–100).
    pub s: u8,
    /// Lightness percentage (0–100).
    pub l: u8,
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self.h as f64, self.s as f64, self.l as f64)
    }
}

/// Converts RGB channels to HSL.
///
/// Gray input (`r == g == b`) has hue and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (sector / 6.0, s)
    };

    Hsl {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Converts HSL to a hex color.
///
/// Hue is taken modulo 360; saturation and lightness are clamped to
/// `0..=100`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let a = s * l.min(1.0 - l);
    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let x = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * x).round().clamp(0.0, 255.0) as u8
    };

    HexColor::from(Rgb(channel(0.0), channel(8.0), channel(4.0)))
}
