//! # LabelKit Core
//!
//! Core units, constants and error types shared by every LabelKit crate.
//! Holds no state: the label model lives in `labelkit-designer`.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{CaptureError, DispatchError, Error, Result};

pub use units::{
    display_px_to_mm, format_length, get_unit_label, mm_to_display_px, mm_to_print_px,
    parse_length, parse_length_with_unit, MeasurementSystem,
};
