//! Viewport and coordinate transformation for the label editor.
//!
//! Handles conversion between screen pixels (pointer events) and layout pixels
//! (text box positions, 96 DPI at zoom 1.0). Both spaces have their origin at
//! the top-left and +Y pointing down, so no axis flip is involved.
//!
//! Formula:
//! ```text
//! screen = layout * zoom + pan
//! layout = (screen - pan) / zoom
//! ```

use std::fmt;

use labelkit_core::constants::DISPLAY_PX_PER_MM;

use crate::types::{CanvasPoint, CanvasSize};

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 50.0;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    /// Creates an identity viewport (zoom 1.0, label at the screen origin).
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level. Values outside (0.1, 50.0) are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    /// Zooms in by multiplying current zoom by 1.2.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * 1.2);
    }

    /// Zooms out by dividing current zoom by 1.2.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / 1.2);
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the screen position of the label's top-left corner.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Screen pixels per physical millimeter at the current zoom.
    ///
    /// This is the real on-screen scale, used to turn resize-drag pointer
    /// deltas into millimeters.
    pub fn px_per_mm(&self) -> f64 {
        DISPLAY_PX_PER_MM * self.zoom
    }

    /// Converts a pointer position to layout coordinates.
    pub fn screen_to_layout(&self, screen: CanvasPoint) -> CanvasPoint {
        CanvasPoint::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Converts layout coordinates to a screen position.
    pub fn layout_to_screen(&self, layout: CanvasPoint) -> CanvasPoint {
        CanvasPoint::new(
            layout.x * self.zoom + self.pan_x,
            layout.y * self.zoom + self.pan_y,
        )
    }

    /// Fits a label of `label_px` layout size into a `screen` area, centred,
    /// with `padding` (0.0 - 0.5) of the area reserved on each side.
    pub fn fit_label(&mut self, label_px: CanvasSize, screen: CanvasSize, padding: f64) {
        if label_px.width <= 0.0 || label_px.height <= 0.0 {
            return;
        }
        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (screen.width * padding_factor) / label_px.width;
        let zoom_y = (screen.height * padding_factor) / label_px.height;
        let new_zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);

        self.zoom = new_zoom;
        self.pan_x = (screen.width - label_px.width * new_zoom) / 2.0;
        self.pan_y = (screen.height - label_px.height * new_zoom) / 2.0;
    }

    /// Resets viewport to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
