//! Interactive click counter.
//!
//! Reads single key presses, maps them to [`Action`](hued::Action)s and redraws a small
//! themed panel after every change. Theme changes go through the
//! [`ThemeSwitcher`] so they are persisted like `theme set`.

use std::io;

use anyhow::{bail, Context as _, Result};
use console::{style, Key, Term};
use tracing::warn;

use hued::theme::{BG_PROPERTY, TEXT_PROPERTY};
use hued::{
    HexColor, Outcome, PreferenceStore, Session, ThemeKind, ThemeSwitcher, ThemeTarget,
};

use super::Context;
use crate::config::Settings;
use crate::keys::{action_for, theme_key};
use crate::output::themed;

const PANEL_WIDTH: usize = 40;

/// [`ThemeTarget`] that paints the counter panel in a terminal.
#[derive(Debug, Clone)]
pub struct TerminalTarget {
    class: String,
    background: HexColor,
    text: HexColor,
    notice: Option<String>,
}

impl Default for TerminalTarget {
    fn default() -> Self {
        Self {
            class: String::new(),
            background: HexColor::WHITE,
            text: HexColor::BLACK,
            notice: None,
        }
    }
}

impl ThemeTarget for TerminalTarget {
    fn set_theme_class(&mut self, class: &str) {
        self.class = class.to_string();
    }

    fn set_property(&mut self, name: &str, value: &str) {
        let Ok(color) = HexColor::parse(value) else {
            warn!(name, value, "ignoring non-color property");
            return;
        };
        match name {
            BG_PROPERTY => self.background = color,
            TEXT_PROPERTY => self.text = color,
            _ => {}
        }
    }
}

impl TerminalTarget {
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn background(&self) -> HexColor {
        self.background
    }

    pub fn text(&self) -> HexColor {
        self.text
    }

    /// Shows a one-line message under the panel until the next theme change.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Renders the panel for the current session state.
    pub fn frame(&self, session: &Session) -> String {
        let panel = themed(self.background, self.text);
        let themes = ThemeKind::ALL
            .iter()
            .map(|kind| {
                let marker = if *kind == session.theme() { '*' } else { ' ' };
                format!("{}{} {}", marker, theme_key(*kind), kind)
            })
            .collect::<Vec<_>>()
            .join("  ");

        let lines = [
            String::new(),
            format!("  count: {}", session.count()),
            String::new(),
            "  space click   r reset   q quit".to_string(),
            format!("  {}", themes),
            String::new(),
        ];

        let mut frame = String::new();
        for line in &lines {
            let padded = format!("{:<width$}", line, width = PANEL_WIDTH);
            frame.push_str(&panel.apply_to(padded).to_string());
            frame.push('\n');
        }
        if let Some(notice) = &self.notice {
            frame.push_str(&style(notice).yellow().to_string());
            frame.push('\n');
        }
        frame
    }
}

/// Drives a session from `keys` until a quit key or the keys run out.
///
/// `present` receives every frame, starting with the initial one. A key read
/// error ends the session with that error. Selecting the active theme again
/// only retries the save, and only after a failed one.
pub fn run_session<I, S, P>(
    keys: I,
    start: ThemeKind,
    switcher: &mut ThemeSwitcher<S>,
    target: &mut TerminalTarget,
    settings: &Settings,
    mut present: P,
) -> Result<Session>
where
    I: IntoIterator<Item = io::Result<Key>>,
    S: PreferenceStore,
    P: FnMut(&str) -> Result<()>,
{
    let mut session = Session::new(start);
    let mut unsaved = false;
    present(&target.frame(&session))?;

    for key in keys {
        let key = key.context("failed to read key")?;
        let Some(action) = action_for(&key) else {
            continue;
        };
        let select = match session.dispatch(action) {
            Outcome::Exit => break,
            Outcome::Unchanged if unsaved => Some(session.theme()),
            Outcome::Unchanged => continue,
            Outcome::Redraw => None,
            Outcome::ThemeChanged(kind) => Some(kind),
        };
        if let Some(kind) = select {
            target.notice = None;
            unsaved = false;
            if let Err(e) = switcher.select(&settings.theme(kind), target) {
                target.set_notice(format!("theme not saved: {}", e));
                unsaved = true;
            }
        }
        present(&target.frame(&session))?;
    }

    Ok(session)
}

/// Runs the counter on the real terminal.
pub fn run(ctx: &Context) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("play needs an interactive terminal");
    }

    let mut switcher = ThemeSwitcher::new(ctx.store());
    let mut target = TerminalTarget::default();
    let fallback = ctx.default_theme();
    let start = match switcher.restore(&mut target, fallback, |kind| ctx.settings.theme(kind)) {
        Ok(kind) => kind,
        Err(e) => {
            target.set_notice(format!("saved theme unavailable: {}", e));
            fallback
        }
    };

    let keys = std::iter::repeat_with(|| term.read_key());
    term.hide_cursor()?;
    let result = run_session(keys, start, &mut switcher, &mut target, &ctx.settings, |frame| {
        term.clear_screen()?;
        term.write_str(frame)?;
        Ok(())
    });
    term.show_cursor()?;

    let session = result?;
    term.write_line(&format!("final count: {}", session.count()))?;
    Ok(())
}
