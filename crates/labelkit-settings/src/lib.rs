//! LabelKit Settings Crate
//!
//! Loads and validates the application configuration.

pub mod config;
pub mod error;

pub use config::{Config, LabelSettings, MeasurementSystem, PrintSettings};
pub use error::{SettingsError, SettingsResult};
