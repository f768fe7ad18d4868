//! Unit conversion utilities
//!
//! Converts label lengths between millimeters, display pixels (96 DPI layout
//! space) and print pixels (raster at the printer's density). Also parses and
//! formats lengths typed in millimeters or inches.

use crate::constants::{DISPLAY_PX_PER_MM, MM_PER_INCH};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Millimeters to layout pixels at the 96 DPI reference density.
pub fn mm_to_display_px(mm: f64) -> f64 {
    mm * DISPLAY_PX_PER_MM
}

/// Layout pixels back to millimeters.
pub fn display_px_to_mm(px: f64) -> f64 {
    px / DISPLAY_PX_PER_MM
}

/// Millimeters to whole print pixels at `dpi`.
///
/// Rounds half away from zero. Each axis is rounded on its own, so the raster
/// aspect ratio can drift from the physical one by under a pixel. Negative
/// lengths saturate to zero.
pub fn mm_to_print_px(mm: f64, dpi: u32) -> u32 {
    let px = (mm / MM_PER_INCH * f64::from(dpi)).round();
    if px <= 0.0 {
        0
    } else {
        px as u32
    }
}

/// Formats a length for display, without the unit label.
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1}", value_mm),
        MeasurementSystem::Imperial => format!("{:.3}", value_mm / MM_PER_INCH),
    }
}

/// Parse length string to millimeters
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => input.parse::<f64>().map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => {
            if input.contains('/') {
                let mut total_inches = 0.0;
                for part in input.split_whitespace() {
                    if part.contains('/') {
                        let frac_parts: Vec<&str> = part.split('/').collect();
                        if frac_parts.len() != 2 {
                            return Err("Invalid fraction format".to_string());
                        }
                        let num = frac_parts[0]
                            .parse::<f64>()
                            .map_err(|_| "Invalid numerator")?;
                        let den = frac_parts[1]
                            .parse::<f64>()
                            .map_err(|_| "Invalid denominator")?;
                        if den == 0.0 {
                            return Err("Division by zero".to_string());
                        }
                        total_inches += num / den;
                    } else {
                        total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                    }
                }
                Ok(total_inches * MM_PER_INCH)
            } else {
                let inches = input.parse::<f64>().map_err(|e| e.to_string())?;
                Ok(inches * MM_PER_INCH)
            }
        }
    }
}

/// Parse a length with an optional unit suffix ("62", "62mm", "2.5in", "1 1/2in").
///
/// A bare number is taken as millimeters.
pub fn parse_length_with_unit(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if let Some(value) = input.strip_suffix("mm") {
        parse_length(value, MeasurementSystem::Metric)
    } else if let Some(value) = input
        .strip_suffix("in")
        .or_else(|| input.strip_suffix('"'))
    {
        parse_length(value, MeasurementSystem::Imperial)
    } else {
        parse_length(input, MeasurementSystem::Metric)
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
