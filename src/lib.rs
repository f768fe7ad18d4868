//! # LabelKit
//!
//! Lays out free-positioned text on a label of configurable physical size
//! and produces a print-ready raster at the label's exact dimensions,
//! whatever the on-screen zoom, view rotation or continuous axis.
//!
//! ## Architecture
//!
//! LabelKit is organized as a workspace with multiple crates:
//!
//! 1. **labelkit-core** - Units, constants, error taxonomy
//! 2. **labelkit-designer** - Label model, text layout, interaction, renderer, capture
//! 3. **labelkit-print** - Dispatcher contract, CUPS backend, print service
//! 4. **labelkit-settings** - Configuration loading and validation
//! 5. **labelkit** - Command line front end that integrates all crates

pub mod cli;

pub use labelkit_core::{CaptureError, DispatchError, Error, MeasurementSystem, Result};
pub use labelkit_designer as designer;
pub use labelkit_designer::{
    Axis, CapturedLabel, LabelDocument, LabelEditor, SkiaSurface, TextStyle, ViewRotation,
};
pub use labelkit_print::{CupsDispatcher, PrintDispatcher, PrintJob, PrintService};
pub use labelkit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("LABELKIT_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so command results on stdout stay pipeable
/// - `info` by default, RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
