//! Label geometry model.
//!
//! Owns the declared physical size, the per-axis continuous (auto-size) flags
//! and the view rotation. Two derived sizes come out of it:
//!
//! ```text
//! actual = declared, or max(declared, floor) on a continuous axis
//! render = actual, swapped when the view is rotated
//! ```
//!
//! `actual` is what gets printed; `render` only drives the on-screen layout.

use labelkit_core::constants::{
    DEFAULT_CONTINUOUS_FLOOR_MM, DEFAULT_LABEL_HEIGHT_MM, DEFAULT_LABEL_WIDTH_MM,
};
use labelkit_core::{mm_to_display_px, mm_to_print_px};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::CanvasSize;

/// Physical label axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// Orientation of the editing view.
///
/// `Rotated` shows the label turned 90° clockwise. It never changes the
/// physical size handed to a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewRotation {
    #[default]
    Normal,
    Rotated,
}

impl ViewRotation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Rotated,
            Self::Rotated => Self::Normal,
        }
    }
}

/// Declared label dimensions plus continuous flags and view rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDocument {
    width_mm: f64,
    height_mm: f64,
    continuous_width: bool,
    continuous_height: bool,
    rotation: ViewRotation,
    continuous_floor_mm: f64,
}

impl Default for LabelDocument {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH_MM, DEFAULT_LABEL_HEIGHT_MM)
    }
}

impl LabelDocument {
    /// Creates a fixed-size label in the normal orientation.
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            continuous_width: false,
            continuous_height: false,
            rotation: ViewRotation::Normal,
            continuous_floor_mm: DEFAULT_CONTINUOUS_FLOOR_MM,
        }
    }

    /// Overrides the minimum size of a continuous axis.
    pub fn with_continuous_floor(mut self, floor_mm: f64) -> Self {
        self.continuous_floor_mm = floor_mm;
        self
    }

    /// Minimum size applied to whichever axis is continuous.
    pub fn continuous_floor_mm(&self) -> f64 {
        self.continuous_floor_mm
    }

    /// Declared width as entered by the user.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Declared height as entered by the user.
    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    /// Declared value of `axis`.
    pub fn declared(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width_mm,
            Axis::Height => self.height_mm,
        }
    }

    /// Sets the declared width. Not validated: non-positive values are kept.
    pub fn set_width_mm(&mut self, width_mm: f64) {
        self.width_mm = width_mm;
    }

    /// Sets the declared height. Not validated: non-positive values are kept.
    pub fn set_height_mm(&mut self, height_mm: f64) {
        self.height_mm = height_mm;
    }

    pub fn set_declared(&mut self, axis: Axis, value_mm: f64) {
        match axis {
            Axis::Width => self.width_mm = value_mm,
            Axis::Height => self.height_mm = value_mm,
        }
    }

    pub fn is_continuous_width(&self) -> bool {
        self.continuous_width
    }

    pub fn is_continuous_height(&self) -> bool {
        self.continuous_height
    }

    pub fn is_continuous(&self, axis: Axis) -> bool {
        match axis {
            Axis::Width => self.continuous_width,
            Axis::Height => self.continuous_height,
        }
    }

    /// Turning width continuous clears the height flag.
    pub fn set_continuous_width(&mut self, continuous: bool) {
        self.continuous_width = continuous;
        if continuous {
            self.continuous_height = false;
        }
    }

    /// Turning height continuous clears the width flag.
    pub fn set_continuous_height(&mut self, continuous: bool) {
        self.continuous_height = continuous;
        if continuous {
            self.continuous_width = false;
        }
    }

    pub fn set_continuous(&mut self, axis: Axis, continuous: bool) {
        match axis {
            Axis::Width => self.set_continuous_width(continuous),
            Axis::Height => self.set_continuous_height(continuous),
        }
    }

    /// The continuous axis, if any.
    pub fn continuous_axis(&self) -> Option<Axis> {
        if self.continuous_width {
            Some(Axis::Width)
        } else if self.continuous_height {
            Some(Axis::Height)
        } else {
            None
        }
    }

    pub fn rotation(&self) -> ViewRotation {
        self.rotation
    }

    pub fn is_rotated(&self) -> bool {
        self.rotation == ViewRotation::Rotated
    }

    pub fn set_rotation(&mut self, rotation: ViewRotation) {
        self.rotation = rotation;
    }

    pub fn toggle_rotation(&mut self) {
        self.rotation = self.rotation.toggled();
    }

    /// Physical size of `axis` after applying the continuous floor.
    pub fn actual(&self, axis: Axis) -> f64 {
        let declared = self.declared(axis);
        if self.is_continuous(axis) {
            declared.max(self.continuous_floor_mm)
        } else {
            declared
        }
    }

    pub fn actual_width(&self) -> f64 {
        self.actual(Axis::Width)
    }

    pub fn actual_height(&self) -> f64 {
        self.actual(Axis::Height)
    }

    /// Horizontal on-screen extent in mm.
    pub fn render_width(&self) -> f64 {
        match self.rotation {
            ViewRotation::Normal => self.actual_width(),
            ViewRotation::Rotated => self.actual_height(),
        }
    }

    /// Vertical on-screen extent in mm.
    pub fn render_height(&self) -> f64 {
        match self.rotation {
            ViewRotation::Normal => self.actual_height(),
            ViewRotation::Rotated => self.actual_width(),
        }
    }

    /// The layout container in display pixels at zoom 1.0.
    pub fn render_size_px(&self) -> CanvasSize {
        CanvasSize::new(
            mm_to_display_px(self.render_width()),
            mm_to_display_px(self.render_height()),
        )
    }

    /// Print raster size for the unrotated actual dimensions.
    pub fn print_size_px(&self, dpi: u32) -> (u32, u32) {
        (
            mm_to_print_px(self.actual_width(), dpi),
            mm_to_print_px(self.actual_height(), dpi),
        )
    }

    /// Which screen direction moves the handle of `axis`: `false` for
    /// horizontal, `true` for vertical.
    pub fn axis_is_vertical_on_screen(&self, axis: Axis) -> bool {
        match (axis, self.rotation) {
            (Axis::Width, ViewRotation::Normal) | (Axis::Height, ViewRotation::Rotated) => false,
            (Axis::Height, ViewRotation::Normal) | (Axis::Width, ViewRotation::Rotated) => true,
        }
    }

    /// New declared size for a resize drag on a continuous axis.
    ///
    /// `px_per_mm` is the on-screen scale at the moment the drag started.
    pub fn resized_value(&self, start_mm: f64, pixel_delta: f64, px_per_mm: f64) -> f64 {
        (start_mm + pixel_delta / px_per_mm).max(self.continuous_floor_mm)
    }
}
