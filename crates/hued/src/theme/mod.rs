//! Themes and their application.
//!
//! ## Model
//!
//! - [`ThemeKind`]: which of the three themes (light, blue, dark)
//! - [`Theme`]: an immutable recipe resolving to [`ThemeTokens`]
//! - [`ThemeTarget`]: receives a root class plus the `--bg-color` and
//!   `--text-color` custom properties
//! - [`ThemeSwitcher`]: applies a theme and persists the choice
//!
//! ## Example
//!
//! ```rust
//! use hued::preference::MemoryStore;
//! use hued::theme::{Theme, ThemeKind, ThemeSwitcher, TokenSheet};
//!
//! let mut switcher = ThemeSwitcher::new(MemoryStore::new());
//! let mut sheet = TokenSheet::new();
//!
//! switcher.select(&Theme::builtin(ThemeKind::Dark), &mut sheet).unwrap();
//! assert_eq!(sheet.class(), Some("theme-dark"));
//! assert!(sheet.to_css().contains("--bg-color: #1f2937;"));
//! ```

pub mod switcher;
mod target;
#[allow(clippy::module_inception)]
mod theme;

pub use switcher::ThemeSwitcher;
pub use target::{apply_theme, ThemeTarget, TokenSheet, BG_PROPERTY, TEXT_PROPERTY};
pub use theme::{Adjustment, TextRule, Theme, ThemeKind, ThemeTokens};
