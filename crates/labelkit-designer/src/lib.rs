//! # LabelKit Designer
//!
//! Label geometry, free-positioned text boxes and the pipeline that turns the
//! interactive view into a print-ready bitmap.
//!
//! ## Architecture
//!
//! ```text
//! LabelEditor
//!   ├── LabelDocument   (declared size, continuous flags, view rotation)
//!   ├── TextBoxLayout   (boxes, ids, clamping, drag protocol)
//!   ├── Viewport        (zoom/pan, screen <-> layout px)
//!   ├── InteractionState (idle / drag / resize)
//!   └── LabelSurface    (renderer, optional)
//!
//! capture_label: Clean render x4 -> 300 DPI output -> rotation fix -> PNG
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use labelkit_designer::{LabelEditor, SkiaSurface};
//!
//! let mut editor = LabelEditor::default();
//! editor.edit_text(1, "Hello")?;
//! editor.attach_surface(Box::new(SkiaSurface::new()));
//! let captured = editor.capture()?;
//! ```

pub mod capture;
pub mod editor;
pub mod error;
pub mod font_manager;
pub mod interaction;
pub mod label;
pub mod layout;
pub mod print_gate;
pub mod renderer;
pub mod scene;
pub mod text_box;
pub mod types;
pub mod viewport;

pub use capture::{capture_label, correction_transform, CaptureSettings, CapturedLabel};
pub use editor::{LabelEditor, MeasureFn, PointerTarget, DEFAULT_BOX_TEXT};
pub use error::{InteractionError, InteractionResult};
pub use interaction::{InteractionState, ResizeDrag};
pub use label::{Axis, LabelDocument, ViewRotation};
pub use layout::{cascade_position, clamp_position, BoxDrag, TextBoxLayout};
pub use print_gate::{PrintGate, PrintPermit};
pub use renderer::{LabelSurface, SkiaSurface};
pub use scene::{LabelScene, RenderMode, ResizeHandle};
pub use text_box::{parse_hex_color, FontSlant, FontWeight, TextBox, TextStyle};
pub use types::{CanvasPoint, CanvasRect, CanvasSize};
pub use viewport::Viewport;

// Re-exported so downstream crates can name pixmaps without their own dependency.
pub use tiny_skia;
