//! Command output in text or JSON form.

use std::io::Write;

use anyhow::Result;
use console::{style, Color, Style};
use serde::Serialize;

use hued::{HexColor, Hsl, ThemeKind};

use crate::cli::Format;

/// Everything `convert` and `luminance` report about a color.
#[derive(Debug, Clone, Serialize)]
pub struct ColorReport {
    pub hex: HexColor,
    pub rgb: [u8; 3],
    pub hsl: Hsl,
    pub luminance: f64,
    pub needs_light_text: bool,
    pub text: HexColor,
}

impl ColorReport {
    pub fn new(color: HexColor) -> Self {
        let rgb = color.rgb();
        Self {
            hex: color,
            rgb: [rgb.0, rgb.1, rgb.2],
            hsl: color.hsl(),
            luminance: color.luminance(),
            needs_light_text: color.is_dark(),
            text: color.contrast_text(),
        }
    }
}

/// Output of `adjust`.
#[derive(Debug, Clone, Serialize)]
pub struct AdjustReport {
    pub input: HexColor,
    pub output: HexColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
}

/// Where the reported theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    Saved,
    Default,
    Selected,
}

/// Output of `theme show` / `theme set`.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeReport {
    pub theme: ThemeKind,
    pub source: ThemeSource,
    pub class: String,
    pub background: HexColor,
    pub text: HexColor,
    pub css: String,
}

/// A two-cell block painted in `color` (plain spaces when colors are off).
pub fn swatch(color: HexColor) -> String {
    style("  ").bg(Color::Color256(color.ansi256())).to_string()
}

/// Style for text on a themed background.
pub fn themed(background: HexColor, text: HexColor) -> Style {
    Style::new()
        .bg(Color::Color256(background.ansi256()))
        .fg(Color::Color256(text.ansi256()))
}

pub fn write_json<W: Write + ?Sized, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn color_report<W: Write + ?Sized>(out: &mut W, format: Format, report: &ColorReport) -> Result<()> {
    match format {
        Format::Json => write_json(out, report),
        Format::Text => {
            let [r, g, b] = report.rgb;
            let Hsl { h, s, l } = report.hsl;
            writeln!(out, "{} {}", swatch(report.hex), style(report.hex).bold())?;
            writeln!(out, "  rgb        {}, {}, {}", r, g, b)?;
            writeln!(out, "  hsl        {}°, {}%, {}%", h, s, l)?;
            writeln!(out, "  luminance  {:.3}", report.luminance)?;
            writeln!(out, "  text       {} {}", swatch(report.text), report.text)?;
            Ok(())
        }
    }
}

pub fn adjust_report<W: Write + ?Sized>(out: &mut W, format: Format, report: &AdjustReport) -> Result<()> {
    match format {
        Format::Json => write_json(out, report),
        Format::Text => {
            writeln!(
                out,
                "{} {} -> {} {}",
                swatch(report.input),
                report.input,
                swatch(report.output),
                style(report.output).bold()
            )?;
            Ok(())
        }
    }
}

pub fn theme_report<W: Write + ?Sized>(out: &mut W, format: Format, report: &ThemeReport) -> Result<()> {
    match format {
        Format::Json => write_json(out, report),
        Format::Text => {
            let sample = themed(report.background, report.text)
                .apply_to(format!(" {} ", report.theme))
                .to_string();
            let source = match report.source {
                ThemeSource::Saved => "saved",
                ThemeSource::Default => "default",
                ThemeSource::Selected => "selected",
            };
            writeln!(out, "{} ({})", sample, source)?;
            writeln!(out, "  class       {}", report.class)?;
            writeln!(out, "  background  {} {}", swatch(report.background), report.background)?;
            writeln!(out, "  text        {} {}", swatch(report.text), report.text)?;
            writeln!(out)?;
            write!(out, "{}", report.css)?;
            Ok(())
        }
    }
}
