//! Argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use hued::ThemeKind;

#[derive(Debug, Parser)]
#[command(
    name = "hued",
    version,
    about = "Color conversions, theme switching and a click counter"
)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preference file, overriding the settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Keep the theme choice in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a color as hex, RGB, HSL and luminance
    Convert {
        /// Hex color (#rgb or #rrggbb)
        color: String,
    },

    /// Scale a color's lightness and/or saturation
    Adjust {
        /// Hex color (#rgb or #rrggbb)
        color: String,

        /// Lightness factor in percent (100 keeps it unchanged)
        #[arg(long, allow_negative_numbers = true, value_parser = parse_percent)]
        lightness: Option<f64>,

        /// Saturation factor in percent (100 keeps it unchanged)
        #[arg(long, allow_negative_numbers = true, value_parser = parse_percent)]
        saturation: Option<f64>,
    },

    /// Print a color's luma and the text color to use on it
    Luminance {
        /// Hex color (#rgb or #rrggbb)
        color: String,
    },

    /// Show or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },

    /// Interactive click counter
    Play,
}

/// Parses a scaling percent, rejecting NaN and infinities.
fn parse_percent(value: &str) -> Result<f64, String> {
    let percent: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if percent.is_finite() {
        Ok(percent)
    } else {
        Err(format!("'{}' is not a finite percentage", value))
    }
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the active theme and its tokens
    Show,

    /// Apply and persist a theme
    Set {
        /// light, blue or dark
        theme: ThemeKind,
    },
}
