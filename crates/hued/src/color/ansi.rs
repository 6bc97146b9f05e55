//! Terminal palette mapping.

use super::hex::{HexColor, Rgb};

/// Converts an RGB color to the nearest xterm 256-color index.
///
/// Grays map onto the 24-step grayscale ramp (232–255), with near-black and
/// near-white snapping to the cube corners 16 and 231. Other colors map onto
/// the 6×6×6 cube.
pub fn rgb_to_ansi256(Rgb(r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

impl HexColor {
    /// Nearest xterm 256-color index.
    pub fn ansi256(&self) -> u8 {
        rgb_to_ansi256(self.rgb())
    }
}
