//! # Hued - Color Adjustment and Theme Switching
//!
//! `hued` converts colors between hex, RGB and HSL, scales lightness and
//! saturation, picks contrasting text by luma, and applies one of three
//! persisted themes (light, blue, dark) to a display target.
//!
//! ## Core Concepts
//!
//! - [`HexColor`]: parsed `#rgb` / `#rrggbb` color, displayed as `#rrggbb`
//! - [`Rgb`] / [`Hsl`]: channel records; HSL is integer-rounded
//! - [`Theme`]: immutable recipe for background and text colors
//! - [`ThemeTarget`]: receives a root class and two custom properties
//! - [`PreferenceStore`]: fallible string store for the chosen theme
//! - [`ThemeSwitcher`]: applies a theme and persists it
//! - [`Session`]: click counter plus active theme, driven by [`Action`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use hued::{adjust_lightness, luminance, HexColor};
//!
//! let bg = adjust_lightness("#f4f6f8", 100.0).unwrap();
//! assert_eq!(bg.to_string(), "#f3f5f7");
//!
//! let text = bg.contrast_text();
//! assert_eq!(text.to_string(), "#0f172a");
//!
//! assert!(luminance("#1f2937").unwrap() < 0.6);
//! ```
//!
//! ## Persisted Themes
//!
//! ```rust
//! use hued::{JsonFileStore, Theme, ThemeKind, ThemeSwitcher, TokenSheet};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = JsonFileStore::new(dir.path().join("prefs.json"));
//! let mut switcher = ThemeSwitcher::new(store);
//! let mut sheet = TokenSheet::new();
//!
//! // Nothing saved yet: light is applied and saved
//! let kind = switcher.restore(&mut sheet, ThemeKind::Light, Theme::builtin).unwrap();
//! assert_eq!(kind, ThemeKind::Light);
//!
//! switcher.select(&Theme::builtin(ThemeKind::Blue), &mut sheet).unwrap();
//! assert_eq!(sheet.class(), Some("theme-blue"));
//! ```

pub mod color;
pub mod error;
pub mod preference;
pub mod session;
pub mod theme;

pub use color::{
    adjust_lightness, adjust_saturation, hex_to_rgb, hsl_to_hex, luminance, rgb_to_hsl, HexColor,
    Hsl, Rgb,
};
pub use error::{ColorError, PreferenceError, ThemeParseError};
pub use preference::{JsonFileStore, MemoryStore, PreferenceStore, THEME_KEY};
pub use session::{Action, Counter, Outcome, Session};
pub use theme::{apply_theme, Theme, ThemeKind, ThemeSwitcher, ThemeTarget, ThemeTokens, TokenSheet};
