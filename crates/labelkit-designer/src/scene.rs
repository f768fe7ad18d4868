//! What the renderer draws: the label container, its text boxes and the
//! interactive decorations, all in layout px of the current (possibly
//! rotated) view.

use labelkit_core::constants::MAX_RENDER_PIXELS;
use tiny_skia::{Color, Pixmap};

use crate::label::{Axis, LabelDocument};
use crate::text_box::{TextBox, TextStyle};
use crate::types::{CanvasRect, CanvasSize};

/// Which decorations a render includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Box borders, tinted backgrounds, delete controls and resize handles.
    #[default]
    Interactive,
    /// Label background and text only. Used for capture.
    Clean,
}

impl RenderMode {
    pub fn shows_decorations(self) -> bool {
        self == Self::Interactive
    }
}

/// A resize handle for a continuous axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeHandle {
    pub axis: Axis,
    pub rect: CanvasRect,
}

/// Borrowed snapshot of everything needed for one render.
#[derive(Debug, Clone)]
pub struct LabelScene<'a> {
    /// Container size in layout px (render width x render height).
    pub size: CanvasSize,
    pub boxes: &'a [TextBox],
    pub style: &'a TextStyle,
    /// Handles for the continuous axis, if any.
    pub handles: Vec<ResizeHandle>,
    /// Edge length of delete controls and handles in layout px.
    pub control_size: f64,
}

impl<'a> LabelScene<'a> {
    pub fn new(
        label: &LabelDocument,
        boxes: &'a [TextBox],
        style: &'a TextStyle,
        control_size: f64,
    ) -> Self {
        let size = label.render_size_px();
        let handles = label
            .continuous_axis()
            .map(|axis| ResizeHandle {
                axis,
                rect: resize_handle_rect(label, axis, size, control_size),
            })
            .into_iter()
            .collect();
        Self {
            size,
            boxes,
            style,
            handles,
            control_size,
        }
    }

    /// Pixel size of a render at `scale`, rounded up.
    pub fn pixel_size(&self, scale: f32) -> (u32, u32) {
        let scale = f64::from(scale);
        (
            (self.size.width * scale).ceil().max(0.0) as u32,
            (self.size.height * scale).ceil().max(0.0) as u32,
        )
    }
}

/// Allocates a white-filled pixmap, refusing empty buffers and anything above
/// [`MAX_RENDER_PIXELS`].
pub fn allocate_pixmap(width: u32, height: u32) -> Option<Pixmap> {
    if u64::from(width) * u64::from(height) > MAX_RENDER_PIXELS {
        return None;
    }
    let mut pixmap = Pixmap::new(width, height)?;
    pixmap.fill(Color::WHITE);
    Some(pixmap)
}

/// Delete control, straddling the box's top-right corner.
pub fn delete_control_rect(text_box: &TextBox, control_size: f64) -> CanvasRect {
    let bounds = text_box.bounds();
    CanvasRect::centered(bounds.right(), bounds.y, control_size)
}

/// Handle for `axis`, centred on the container edge that moves when the
/// axis grows. In the rotated view the physical width runs down the screen,
/// so its handle sits on the bottom edge.
pub fn resize_handle_rect(
    label: &LabelDocument,
    axis: Axis,
    container: CanvasSize,
    control_size: f64,
) -> CanvasRect {
    if label.axis_is_vertical_on_screen(axis) {
        CanvasRect::centered(container.width / 2.0, container.height, control_size)
    } else {
        CanvasRect::centered(container.width, container.height / 2.0, control_size)
    }
}
