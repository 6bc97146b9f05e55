//! Hex color parsing and formatting.
//!
//! Accepts `#rgb`, `#rrggbb`, `rgb` and `rrggbb` (case-insensitive). The
//! shorthand form doubles each digit, so `#abc` is `#aabbcc`. Anything else is
//! rejected with [`ColorError::InvalidFormat`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::hsl::{rgb_to_hsl, Hsl};
use crate::error::ColorError;

/// A simple RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Converts to HSL with integer-rounded components.
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.0, self.1, self.2)
    }

    /// Returns the channels as a tuple.
    pub fn as_tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

/// A parsed hex color.
///
/// Always displays in normalized form: `#` followed by six lowercase digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Rgb);

impl HexColor {
    /// Black, `#000000`.
    pub const BLACK: HexColor = HexColor(Rgb(0, 0, 0));
    /// White, `#ffffff`.
    pub const WHITE: HexColor = HexColor(Rgb(255, 255, 255));

    /// Builds a color from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        HexColor(Rgb(r, g, b))
    }

    /// Parses a hex string. See [`hex_to_rgb`].
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        hex_to_rgb(input).map(HexColor)
    }

    pub fn rgb(&self) -> Rgb {
        self.0
    }

    pub fn hsl(&self) -> Hsl {
        self.0.to_hsl()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        HexColor(rgb)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb(r, g, b) = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parses a hex color string into its RGB channels.
///
/// Surrounding whitespace and one leading `#` are ignored. The remaining text
/// must be exactly 3 or 6 ASCII hex digits.
pub fn hex_to_rgb(input: &str) -> Result<Rgb, ColorError> {
    let trimmed = input.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    // from_str_radix tolerates a leading '+', so check digits up front.
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid(input));
    }

    let digit = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::invalid(input));

    match hex.len() {
        // #rgb -> #rrggbb
        3 => Ok(Rgb(
            digit(&hex[0..1])? * 17,
            digit(&hex[1..2])? * 17,
            digit(&hex[2..3])? * 17,
        )),
        6 => Ok(Rgb(
            digit(&hex[0..2])?,
            digit(&hex[2..4])?,
            digit(&hex[4..6])?,
        )),
        _ => Err(ColorError::invalid(input)),
    }
}

/// Parses and re-renders a hex color in `#rrggbb` form.
pub fn normalize(input: &str) -> Result<String, ColorError> {
    HexColor::parse(input).map(|c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(hex_to_rgb("#ff6b35").unwrap(), Rgb(255, 107, 53));
        assert_eq!(hex_to_rgb("1f2937").unwrap(), Rgb(31, 41, 55));
    }

    #[test]
    fn test_parse_shorthand_matches_expanded() {
        assert_eq!(hex_to_rgb("abc").unwrap(), hex_to_rgb("aabbcc").unwrap());
        assert_eq!(hex_to_rgb("#fff").unwrap(), Rgb(255, 255, 255));
        assert_eq!(hex_to_rgb("#000").unwrap(), Rgb(0, 0, 0));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(hex_to_rgb("#ABCDEF").unwrap(), hex_to_rgb("#abcdef").unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(hex_to_rgb("  #e7f0ff\n").unwrap(), Rgb(231, 240, 255));
    }

    #[test]
    fn test_rejects_wrong_length() {
        for input in ["", "#", "#ab", "#abcd", "#abcde", "#abcdef0", "##abc"] {
            assert_eq!(
                hex_to_rgb(input),
                Err(ColorError::invalid(input)),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_rejects_non_hex_characters() {
        assert!(hex_to_rgb("#ggg").is_err());
        assert!(hex_to_rgb("#12345z").is_err());
        assert!(hex_to_rgb("+ff").is_err());
        assert!(hex_to_rgb("#ééé").is_err());
    }

    #[test]
    fn test_display_is_normalized() {
        assert_eq!(HexColor::parse("#ABC").unwrap().to_string(), "#aabbcc");
        assert_eq!(HexColor::from_rgb(1, 2, 3).to_string(), "#010203");
        assert_eq!(normalize("F4F6F8").unwrap(), "#f4f6f8");
    }

    #[test]
    fn test_serde_as_string() {
        let color = HexColor::parse("#e7f0ff").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#e7f0ff\"");

        let back: HexColor = serde_json::from_str("\"#E7F0FF\"").unwrap();
        assert_eq!(back, color);

        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
    }
}
