//! Command line interface.
//!
//! The argument model lives here rather than in `main.rs` so the mapping
//! from flags to an editor can be tested without running a command.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use labelkit_core::{
    format_length, get_unit_label, parse_length, parse_length_with_unit, MeasurementSystem,
};
use labelkit_designer::{
    parse_hex_color, Axis, FontSlant, FontWeight, LabelEditor, SkiaSurface, ViewRotation,
};
use labelkit_settings::Config;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "labelkit",
    version,
    about = "Lay out text labels and print them at their exact physical size"
)]
pub struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available printers
    Printers,
    /// List installed font families
    Fonts,
    /// Render the label to a PNG file
    Render {
        #[command(flatten)]
        label: LabelArgs,
        /// Output file
        #[arg(short = 'o', long = "out")]
        out: PathBuf,
    },
    /// Write a preview image and print its path
    Preview {
        #[command(flatten)]
        label: LabelArgs,
    },
    /// Send the label to a printer
    Print {
        #[command(flatten)]
        label: LabelArgs,
        /// Printer name; falls back to print.default_printer
        #[arg(short = 'p', long = "printer")]
        printer: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct LabelArgs {
    /// Label width, e.g. "62", "62mm", "2.5in", "1 1/2in"
    #[arg(short = 'W', long = "width")]
    pub width: Option<String>,

    /// Label height, same formats as --width
    #[arg(short = 'H', long = "height")]
    pub height: Option<String>,

    /// Units for bare numbers and reported sizes: metric (mm) or imperial (in).
    /// Defaults to label.units
    #[arg(short = 'u', long = "units")]
    pub units: Option<MeasurementSystem>,

    /// Auto-size the width (floored at the continuous minimum)
    #[arg(long = "continuous-width", conflicts_with = "continuous_height")]
    pub continuous_width: bool,

    /// Auto-size the height (floored at the continuous minimum)
    #[arg(long = "continuous-height")]
    pub continuous_height: bool,

    /// Lay out in the rotated view
    #[arg(short = 'r', long = "rotated")]
    pub rotated: bool,

    /// Text box content, repeat for more boxes. "\n" starts a new line
    #[arg(short = 't', long = "text")]
    pub text: Vec<String>,

    #[arg(long = "font-family")]
    pub font_family: Option<String>,

    /// Font size in display pixels
    #[arg(long = "font-size")]
    pub font_size: Option<f64>,

    /// Text color, "#rrggbb" or "#rgb"
    #[arg(long = "color")]
    pub color: Option<String>,

    #[arg(long = "bold")]
    pub bold: bool,

    #[arg(long = "italic")]
    pub italic: bool,
}

/// Parses a length. Explicit units win; bare numbers use `units`.
pub fn parse_dimension(input: &str, units: MeasurementSystem) -> anyhow::Result<f64> {
    let trimmed = input.trim();
    let has_unit = trimmed.ends_with("mm") || trimmed.ends_with("in") || trimmed.ends_with('"');
    let value = if has_unit {
        parse_length_with_unit(trimmed)
    } else {
        parse_length(trimmed, units)
    };
    value.map_err(|e| anyhow::anyhow!("Invalid length '{}': {}", input, e))
}

/// Builds an editor from the configuration and command line overrides.
pub fn build_editor(args: &LabelArgs, config: &Config) -> anyhow::Result<LabelEditor> {
    let mut style = config.style.clone();
    if let Some(family) = &args.font_family {
        style.font_family = family.clone();
    }
    if let Some(size) = args.font_size {
        if !(size.is_finite() && size > 0.0) {
            bail!("Font size must be > 0, got {}", size);
        }
        style.font_size = size;
    }
    if let Some(color) = &args.color {
        if parse_hex_color(color).is_none() {
            bail!("Invalid color '{}', expected #rrggbb or #rgb", color);
        }
        style.font_color = color.clone();
    }
    if args.bold {
        style.font_weight = FontWeight::Bold;
    }
    if args.italic {
        style.font_style = FontSlant::Italic;
    }

    let mut label = config.label_document();
    let units = args.units.unwrap_or(config.label.units);
    if let Some(width) = &args.width {
        label.set_width_mm(parse_dimension(width, units).context("--width")?);
    }
    if let Some(height) = &args.height {
        label.set_height_mm(parse_dimension(height, units).context("--height")?);
    }
    if args.continuous_width {
        label.set_continuous(Axis::Width, true);
    }
    if args.continuous_height {
        label.set_continuous(Axis::Height, true);
    }
    if args.rotated {
        label.set_rotation(ViewRotation::Rotated);
    }

    let mut editor = LabelEditor::new(label, style);
    let mut texts = args.text.iter().map(|t| t.replace("\\n", "\n"));
    if let Some(first) = texts.next() {
        editor.edit_text(1, first)?;
    }
    for text in texts {
        editor.add_text_box(text);
    }

    editor.set_capture_settings(config.capture_settings());
    editor.attach_surface(Box::new(SkiaSurface::new()));
    debug!(
        "Editor ready: {:.1}x{:.1} mm, {} box(es)",
        editor.label().actual_width(),
        editor.label().actual_height(),
        editor.layout().len()
    );
    Ok(editor)
}

/// Physical and raster size of the label, e.g. `62.0 x 30.0 mm (732 x 354 px)`.
pub fn describe_label(editor: &LabelEditor, units: MeasurementSystem) -> String {
    let label = editor.label();
    let (width_px, height_px) = label.print_size_px(editor.capture_settings().dpi);
    format!(
        "{} x {} {} ({} x {} px)",
        format_length(label.actual_width(), units),
        format_length(label.actual_height(), units),
        get_unit_label(units),
        width_px,
        height_px
    )
}

/// The printer to use: the flag, then the configured default.
pub fn resolve_printer(flag: Option<String>, config: &Config) -> anyhow::Result<String> {
    match flag.or_else(|| config.print.default_printer.clone()) {
        Some(printer) => Ok(printer),
        None => bail!("No printer given. Use --printer or set print.default_printer"),
    }
}
