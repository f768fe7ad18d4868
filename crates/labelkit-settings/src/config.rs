//! Configuration for LabelKit
//!
//! Read-only from the application's point of view: nothing is written back.
//! Supports JSON and TOML files, chosen by extension. Sections:
//! - `label`: default declared size, continuous floor, input units
//! - `style`: document-wide text style
//! - `print`: capture density, default printer, preview handling

use labelkit_core::constants::{
    CAPTURE_SCALE, DEFAULT_CONTINUOUS_FLOOR_MM, DEFAULT_LABEL_HEIGHT_MM, DEFAULT_LABEL_WIDTH_MM,
    PRINT_DPI,
};
pub use labelkit_core::MeasurementSystem;
use labelkit_designer::{CaptureSettings, LabelDocument, TextStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Label defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    pub width_mm: f64,
    pub height_mm: f64,
    /// Minimum size of a continuous axis
    pub continuous_floor_mm: f64,
    /// Unit assumed for bare numbers on the command line
    pub units: MeasurementSystem,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_LABEL_WIDTH_MM,
            height_mm: DEFAULT_LABEL_HEIGHT_MM,
            continuous_floor_mm: DEFAULT_CONTINUOUS_FLOOR_MM,
            units: MeasurementSystem::Metric,
        }
    }
}

/// Capture and dispatch settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    /// Output raster density
    pub dpi: u32,
    /// Snapshot magnification
    pub capture_scale: f32,
    pub default_printer: Option<String>,
    /// Where previews are written; the system temp dir when unset
    pub preview_dir: Option<PathBuf>,
    /// Open previews with the platform viewer
    pub open_preview: bool,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            dpi: PRINT_DPI,
            capture_scale: CAPTURE_SCALE,
            default_printer: None,
            preview_dir: None,
            open_preview: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub label: LabelSettings,
    pub style: TextStyle,
    pub print: PrintSettings,
}

impl Config {
    /// `<config_dir>/labelkit/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("labelkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given. Otherwise loads the default location, falling
    /// back to built-in defaults when that file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_config_path() {
            Some(default_path) if default_path.exists() => Self::load_from_file(&default_path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !is_positive(self.label.continuous_floor_mm) {
            return Err(SettingsError::invalid(
                "label.continuous_floor_mm",
                "must be > 0",
            ));
        }

        if !is_positive(self.style.font_size) {
            return Err(SettingsError::invalid("style.font_size", "must be > 0"));
        }

        if self.style.rgb().is_none() {
            return Err(SettingsError::invalid(
                "style.font_color",
                format!("'{}' is not a #rrggbb or #rgb color", self.style.font_color),
            ));
        }

        if self.print.dpi == 0 {
            return Err(SettingsError::invalid("print.dpi", "must be > 0"));
        }

        if !is_positive(f64::from(self.print.capture_scale)) {
            return Err(SettingsError::invalid("print.capture_scale", "must be > 0"));
        }

        Ok(())
    }

    /// A fresh label with the configured size and floor.
    pub fn label_document(&self) -> LabelDocument {
        LabelDocument::new(self.label.width_mm, self.label.height_mm)
            .with_continuous_floor(self.label.continuous_floor_mm)
    }

    pub fn capture_settings(&self) -> CaptureSettings {
        CaptureSettings {
            scale: self.print.capture_scale,
            dpi: self.print.dpi,
        }
    }

    pub fn preview_dir(&self) -> PathBuf {
        self.print
            .preview_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}
