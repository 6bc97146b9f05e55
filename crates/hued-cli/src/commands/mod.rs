//! Subcommand implementations.

mod color;
pub mod play;
mod theme;

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use hued::{JsonFileStore, MemoryStore, PreferenceStore, ThemeKind};

use crate::cli::{Cli, Command, Format, ThemeCommand};
use crate::config::{detect_system_theme, Settings};

/// Resolved settings shared by all subcommands.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub format: Format,
    pub persist: bool,
}

impl Context {
    /// Builds the context from parsed arguments, loading the settings file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = Settings::load(cli.config.as_deref())?;
        if let Some(prefs) = &cli.prefs {
            settings.preferences = prefs.clone();
        }
        Ok(Self {
            settings,
            format: cli.format,
            persist: !cli.no_persist,
        })
    }

    /// The preference store selected by the settings and `--no-persist`.
    pub fn store(&self) -> Box<dyn PreferenceStore> {
        if self.persist {
            debug!(path = %self.settings.preferences.display(), "using preference file");
            Box::new(JsonFileStore::new(&self.settings.preferences))
        } else {
            Box::new(MemoryStore::new())
        }
    }

    /// Theme to use when nothing has been saved.
    pub fn default_theme(&self) -> ThemeKind {
        self.settings.default_theme.resolve(detect_system_theme)
    }
}

/// Runs the parsed command, writing its output to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;
    match cli.command {
        Command::Convert { color } => color::convert(&ctx, &color, out),
        Command::Adjust {
            color,
            lightness,
            saturation,
        } => color::adjust(&ctx, &color, lightness, saturation, out),
        Command::Luminance { color } => color::luminance(&ctx, &color, out),
        Command::Theme { action } => match action {
            ThemeCommand::Show => theme::show(&ctx, out),
            ThemeCommand::Set { theme } => theme::set(&ctx, theme, out),
        },
        Command::Play => play::run(&ctx),
    }
}
