//! `convert`, `adjust` and `luminance`.

use std::io::Write;

use anyhow::{bail, Context as _, Result};
use console::style;

use hued::color::DARK_BACKGROUND_THRESHOLD;
use hued::HexColor;

use super::Context;
use crate::cli::Format;
use crate::output::{self, AdjustReport, ColorReport};

fn parse(color: &str) -> Result<HexColor> {
    HexColor::parse(color).with_context(|| format!("cannot read color '{}'", color))
}

pub fn convert<W: Write>(ctx: &Context, color: &str, out: &mut W) -> Result<()> {
    let report = ColorReport::new(parse(color)?);
    output::color_report(out, ctx.format, &report)
}

pub fn adjust<W: Write>(
    ctx: &Context,
    color: &str,
    lightness: Option<f64>,
    saturation: Option<f64>,
    out: &mut W,
) -> Result<()> {
    if lightness.is_none() && saturation.is_none() {
        bail!("nothing to adjust: pass --lightness and/or --saturation");
    }

    let input = parse(color)?;
    let mut adjusted = input;
    if let Some(percent) = lightness {
        adjusted = adjusted.scale_lightness(percent);
    }
    if let Some(percent) = saturation {
        adjusted = adjusted.scale_saturation(percent);
    }

    let report = AdjustReport {
        input,
        output: adjusted,
        lightness,
        saturation,
    };
    output::adjust_report(out, ctx.format, &report)
}

pub fn luminance<W: Write>(ctx: &Context, color: &str, out: &mut W) -> Result<()> {
    let report = ColorReport::new(parse(color)?);
    match ctx.format {
        Format::Json => output::write_json(out, &report),
        Format::Text => {
            let verdict = if report.needs_light_text {
                format!("below {} - use light text", DARK_BACKGROUND_THRESHOLD)
            } else {
                format!("at or above {} - use dark text", DARK_BACKGROUND_THRESHOLD)
            };
            writeln!(
                out,
                "{:.3} ({}: {})",
                report.luminance,
                verdict,
                style(report.text).bold()
            )?;
            Ok(())
        }
    }
}
