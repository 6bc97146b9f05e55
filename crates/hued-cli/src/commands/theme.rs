//! `theme show` and `theme set`.

use std::io::Write;

use anyhow::{Context as _, Result};
use tracing::warn;

use hued::{apply_theme, ThemeKind, ThemeSwitcher, ThemeTokens, TokenSheet};

use super::Context;
use crate::output::{self, ThemeReport, ThemeSource};

fn report(kind: ThemeKind, source: ThemeSource, tokens: ThemeTokens, sheet: &TokenSheet) -> ThemeReport {
    ThemeReport {
        theme: kind,
        source,
        class: sheet.class().unwrap_or_default().to_string(),
        background: tokens.background,
        text: tokens.text,
        css: sheet.to_css(),
    }
}

pub fn show<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    let switcher = ThemeSwitcher::new(ctx.store());
    let (kind, source) = match switcher.saved() {
        Ok(Some(kind)) => (kind, ThemeSource::Saved),
        Ok(None) => (ctx.default_theme(), ThemeSource::Default),
        Err(e) => {
            warn!(error = %e, "showing default theme");
            (ctx.default_theme(), ThemeSource::Default)
        }
    };

    let mut sheet = TokenSheet::new();
    let tokens = apply_theme(&ctx.settings.theme(kind), &mut sheet);
    output::theme_report(out, ctx.format, &report(kind, source, tokens, &sheet))
}

pub fn set<W: Write>(ctx: &Context, kind: ThemeKind, out: &mut W) -> Result<()> {
    let mut switcher = ThemeSwitcher::new(ctx.store());
    let mut sheet = TokenSheet::new();
    let tokens = switcher
        .select(&ctx.settings.theme(kind), &mut sheet)
        .with_context(|| format!("theme '{}' could not be saved", kind))?;
    output::theme_report(out, ctx.format, &report(kind, ThemeSource::Selected, tokens, &sheet))
}
