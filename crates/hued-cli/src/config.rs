//! Settings file.
//!
//! ```yaml
//! preferences: /home/me/.config/hued/prefs.json
//! default_theme: auto      # auto | light | blue | dark
//! light_lightness: 100     # lightness percent for the light theme
//! blue_saturation: 100     # saturation percent for the blue theme
//! ```
//!
//! Every field is optional. Command-line flags win over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use hued::{Theme, ThemeKind};

/// Default preference file, relative to the working directory.
pub const DEFAULT_PREFS_FILE: &str = "hued-prefs.json";

/// Theme used when no preference has been saved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultTheme {
    /// Follow the OS appearance: dark if it reports dark, light otherwise.
    Auto,
    #[default]
    Light,
    Blue,
    Dark,
}

impl DefaultTheme {
    /// Resolves to a concrete kind, consulting `detect` only for `Auto`.
    pub fn resolve(self, detect: impl FnOnce() -> ThemeKind) -> ThemeKind {
        match self {
            DefaultTheme::Auto => detect(),
            DefaultTheme::Light => ThemeKind::Light,
            DefaultTheme::Blue => ThemeKind::Blue,
            DefaultTheme::Dark => ThemeKind::Dark,
        }
    }
}

/// Asks the OS whether it is in dark mode.
pub fn detect_system_theme() -> ThemeKind {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => ThemeKind::Dark,
        Ok(_) => ThemeKind::Light,
        Err(e) => {
            debug!(error = %e, "could not detect system appearance");
            ThemeKind::Light
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub preferences: PathBuf,
    pub default_theme: DefaultTheme,
    pub light_lightness: f64,
    pub blue_saturation: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preferences: PathBuf::from(DEFAULT_PREFS_FILE),
            default_theme: DefaultTheme::default(),
            light_lightness: 100.0,
            blue_saturation: 100.0,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml).context("invalid settings")?;
        for (name, percent) in [
            ("light_lightness", settings.light_lightness),
            ("blue_saturation", settings.blue_saturation),
        ] {
            if !percent.is_finite() {
                bail!("{} must be a finite percentage, got {}", name, percent);
            }
        }
        Ok(settings)
    }

    /// Loads settings from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        let settings = Self::from_yaml(&yaml)
            .with_context(|| format!("failed to load settings {}", path.display()))?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// The theme for `kind` with this file's adjustment percentages.
    pub fn theme(&self, kind: ThemeKind) -> Theme {
        let theme = Theme::builtin(kind);
        match kind {
            ThemeKind::Light => theme.with_adjustment_percent(self.light_lightness),
            ThemeKind::Blue => theme.with_adjustment_percent(self.blue_saturation),
            ThemeKind::Dark => theme,
        }
    }
}
