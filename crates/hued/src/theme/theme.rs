//! Theme values.
//!
//! A [`Theme`] is an immutable recipe: a base background color, an optional
//! lightness or saturation scaling, and a rule for the text color. Resolving
//! it yields [`ThemeTokens`], the two colors written to the page root.
//!
//! ```rust
//! use hued::theme::{Theme, ThemeKind};
//!
//! let dark = Theme::builtin(ThemeKind::Dark);
//! let tokens = dark.tokens();
//! assert_eq!(tokens.background.to_string(), "#1f2937");
//! assert_eq!(tokens.text.to_string(), "#f3f4f6");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::ThemeParseError;

/// The three selectable themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Blue,
    Dark,
}

impl ThemeKind {
    /// All kinds, in button order.
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Light, ThemeKind::Blue, ThemeKind::Dark];

    /// Name used for persistence and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Blue => "blue",
            ThemeKind::Dark => "dark",
        }
    }

    /// Class set on the root element while this theme is active.
    pub fn class_name(&self) -> &'static str {
        match self {
            ThemeKind::Light => "theme-light",
            ThemeKind::Blue => "theme-blue",
            ThemeKind::Dark => "theme-dark",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeKind {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeKind::Light),
            "blue" => Ok(ThemeKind::Blue),
            "dark" => Ok(ThemeKind::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

/// How the base background color is transformed before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Use the base color as-is.
    None,
    /// Scale HSL lightness by the given percent.
    Lightness(f64),
    /// Scale HSL saturation by the given percent.
    Saturation(f64),
}

impl Adjustment {
    pub fn apply(&self, base: HexColor) -> HexColor {
        match *self {
            Adjustment::None => base,
            Adjustment::Lightness(percent) => base.scale_lightness(percent),
            Adjustment::Saturation(percent) => base.scale_saturation(percent),
        }
    }
}

/// How the text color is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRule {
    /// Light or dark text depending on background luma.
    Contrast,
    /// Always this color.
    Fixed(HexColor),
}

/// Resolved colors for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub background: HexColor,
    pub text: HexColor,
}

/// An immutable theme recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    kind: ThemeKind,
    base: HexColor,
    adjustment: Adjustment,
    text: TextRule,
}

impl Theme {
    pub fn new(kind: ThemeKind, base: HexColor, adjustment: Adjustment, text: TextRule) -> Self {
        Self {
            kind,
            base,
            adjustment,
            text,
        }
    }

    /// The stock recipe for `kind`.
    ///
    /// | kind  | base      | adjustment       | text      |
    /// |-------|-----------|------------------|-----------|
    /// | light | `#f4f6f8` | lightness 100%   | contrast  |
    /// | blue  | `#e7f0ff` | saturation 100%  | contrast  |
    /// | dark  | `#1f2937` | none             | `#f3f4f6` |
    pub fn builtin(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::new(
                kind,
                HexColor::from_rgb(0xf4, 0xf6, 0xf8),
                Adjustment::Lightness(100.0),
                TextRule::Contrast,
            ),
            ThemeKind::Blue => Self::new(
                kind,
                HexColor::from_rgb(0xe7, 0xf0, 0xff),
                Adjustment::Saturation(100.0),
                TextRule::Contrast,
            ),
            ThemeKind::Dark => Self::new(
                kind,
                HexColor::from_rgb(0x1f, 0x29, 0x37),
                Adjustment::None,
                TextRule::Fixed(HexColor::from_rgb(0xf3, 0xf4, 0xf6)),
            ),
        }
    }

    /// Replaces the scaling percent, keeping the channel it applies to.
    ///
    /// Themes without an adjustment are returned unchanged.
    pub fn with_adjustment_percent(mut self, percent: f64) -> Self {
        self.adjustment = match self.adjustment {
            Adjustment::None => Adjustment::None,
            Adjustment::Lightness(_) => Adjustment::Lightness(percent),
            Adjustment::Saturation(_) => Adjustment::Saturation(percent),
        };
        self
    }

    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    pub fn base(&self) -> HexColor {
        self.base
    }

    pub fn adjustment(&self) -> Adjustment {
        self.adjustment
    }

    /// Resolves the background, then the text color against it.
    pub fn tokens(&self) -> ThemeTokens {
        let background = self.adjustment.apply(self.base);
        let text = match self.text {
            TextRule::Contrast => background.contrast_text(),
            TextRule::Fixed(color) => color,
        };
        ThemeTokens { background, text }
    }
}

impl From<ThemeKind> for Theme {
    fn from(kind: ThemeKind) -> Self {
        Theme::builtin(kind)
    }
}
