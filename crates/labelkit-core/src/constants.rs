//! Application-wide numeric constants.
//! Lengths are in millimeters unless the name says otherwise.

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Reference density of the on-screen layout (CSS pixel density).
pub const DISPLAY_DPI: f64 = 96.0;

/// Display pixels per millimeter at zoom 1.0 (96 / 25.4).
pub const DISPLAY_PX_PER_MM: f64 = DISPLAY_DPI / MM_PER_INCH;

/// Density of the final print raster.
pub const PRINT_DPI: u32 = 300;

/// Magnification used when snapshotting the rendered label.
pub const CAPTURE_SCALE: f32 = 4.0;

/// Largest pixel buffer (width x height) the renderer will allocate, for both
/// the magnified snapshot and the print output. 2^27 RGBA pixels is 512 MiB.
pub const MAX_RENDER_PIXELS: u64 = 1 << 27;

/// Minimum size of a continuous (auto-sized) axis, shared by both axes.
pub const DEFAULT_CONTINUOUS_FLOOR_MM: f64 = 10.0;

/// Declared label size at session start.
pub const DEFAULT_LABEL_WIDTH_MM: f64 = 100.0;
pub const DEFAULT_LABEL_HEIGHT_MM: f64 = 50.0;

/// First text box position and the per-id cascade step (layout px).
pub const BOX_BASE_OFFSET_PX: f64 = 10.0;
pub const BOX_OFFSET_STEP_PX: f64 = 15.0;
/// Number of cascade positions before placement wraps around.
pub const BOX_CASCADE_LEN: u32 = 8;

/// Inner padding of a text box (layout px).
pub const BOX_PADDING_PX: f64 = 4.0;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Average glyph advance used when no font could be resolved.
pub const FALLBACK_ADVANCE_FACTOR: f64 = 0.6;

/// Edge length of delete controls and resize handles (screen px).
pub const HANDLE_SIZE_PX: f64 = 12.0;
