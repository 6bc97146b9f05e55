//! Color conversion and adjustment.
//!
//! Pure functions over hex strings and typed [`Rgb`]/[`Hsl`]/[`HexColor`]
//! values. Nothing here holds state or performs I/O.
//!
//! ```rust
//! use hued::color::{adjust_lightness, hex_to_rgb, luminance, rgb_to_hsl, Hsl};
//!
//! assert_eq!(hex_to_rgb("abc").unwrap(), hex_to_rgb("#aabbcc").unwrap());
//! assert_eq!(rgb_to_hsl(244, 246, 248), Hsl::new(210, 22, 96));
//!
//! let brighter = adjust_lightness("#1f2937", 150.0).unwrap();
//! assert!(brighter.hsl().l > 17);
//!
//! assert!(luminance("#1f2937").unwrap() < 0.6);
//! ```

mod adjust;
mod ansi;
mod hex;
mod hsl;

pub use adjust::{
    adjust_lightness, adjust_saturation, luminance, DARK_BACKGROUND_THRESHOLD, DARK_TEXT,
    LIGHT_TEXT,
};
pub use ansi::rgb_to_ansi256;
pub use hex::{hex_to_rgb, normalize, HexColor, Rgb};
pub use hsl::{hsl_to_hex, rgb_to_hsl, Hsl};
