//! Capture and rasterize pipeline.
//!
//! Turns the on-screen label into a print-ready bitmap:
//!
//! 1. render the scene in [`RenderMode::Clean`] at `scale` magnification
//! 2. size the output from the unrotated actual dimensions at `dpi`
//! 3. fill the output white
//! 4. blit the capture, undoing the view rotation when there is one
//! 5. encode to PNG
//!
//! The render is a pure function of the scene, so nothing has to be hidden
//! beforehand or restored afterwards.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{ImageFormat, RgbaImage};
use labelkit_core::constants::{CAPTURE_SCALE, MAX_RENDER_PIXELS, PRINT_DPI};
use labelkit_core::CaptureError;
use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};
use tracing::{debug, info};

use crate::label::{LabelDocument, ViewRotation};
use crate::renderer::LabelSurface;
use crate::scene::{allocate_pixmap, LabelScene, RenderMode};

/// Magnification of the snapshot and density of the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureSettings {
    pub scale: f32,
    pub dpi: u32,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            scale: CAPTURE_SCALE,
            dpi: PRINT_DPI,
        }
    }
}

/// Encoded output of one capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedLabel {
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    /// Physical size, always unrotated.
    pub width_mm: f64,
    pub height_mm: f64,
}

impl CapturedLabel {
    /// `data:image/png;base64,...`
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(&self.png))
    }
}

/// Maps a capture of `cw` x `ch` pixels onto a `tw` x `th` output.
///
/// For the rotated view the capture is the label turned 90° clockwise; the
/// result turns it back 90° counter-clockwise about the output centre, with
/// the capture height stretched onto the output width and its width onto the
/// output height.
pub fn correction_transform(rotation: ViewRotation, cw: f32, ch: f32, tw: f32, th: f32) -> Transform {
    match rotation {
        ViewRotation::Normal => Transform::from_scale(tw / cw, th / ch),
        ViewRotation::Rotated => Transform::from_translate(-cw / 2.0, -ch / 2.0)
            .post_scale(th / cw, tw / ch)
            .post_rotate(-90.0)
            .post_translate(tw / 2.0, th / 2.0),
    }
}

/// Runs the whole pipeline. Fails with `NotReady` when no surface is attached.
pub fn capture_label(
    surface: Option<&dyn LabelSurface>,
    scene: &LabelScene<'_>,
    label: &LabelDocument,
    settings: &CaptureSettings,
) -> Result<CapturedLabel, CaptureError> {
    let surface = surface.ok_or(CaptureError::NotReady)?;

    let (cw, ch) = scene.pixel_size(settings.scale);
    let (tw, th) = label.print_size_px(settings.dpi);
    // Both buffers must fit under the cap before anything is rendered.
    if exceeds_pixel_cap(cw, ch) {
        return Err(CaptureError::RenderContext {
            width: cw,
            height: ch,
        });
    }
    if exceeds_pixel_cap(tw, th) {
        return Err(CaptureError::RenderContext {
            width: tw,
            height: th,
        });
    }

    let captured = surface
        .snapshot(scene, RenderMode::Clean, settings.scale)
        .ok_or(CaptureError::RenderContext {
            width: cw,
            height: ch,
        })?;
    debug!(
        "Captured {}x{} px at {}x",
        captured.width(),
        captured.height(),
        settings.scale
    );

    let mut output = allocate_pixmap(tw, th).ok_or(CaptureError::RenderContext {
        width: tw,
        height: th,
    })?;

    let transform = correction_transform(
        label.rotation(),
        captured.width() as f32,
        captured.height() as f32,
        tw as f32,
        th as f32,
    );
    let paint = PixmapPaint {
        quality: FilterQuality::Bicubic,
        ..PixmapPaint::default()
    };
    output.draw_pixmap(0, 0, captured.as_ref(), &paint, transform, None);

    let png = encode_png(&output)?;
    info!(
        "Rasterized {:.1}x{:.1} mm label to {}x{} px ({} bytes)",
        label.actual_width(),
        label.actual_height(),
        tw,
        th,
        png.len()
    );

    Ok(CapturedLabel {
        png,
        width_px: tw,
        height_px: th,
        width_mm: label.actual_width(),
        height_mm: label.actual_height(),
    })
}

fn exceeds_pixel_cap(width: u32, height: u32) -> bool {
    u64::from(width) * u64::from(height) > MAX_RENDER_PIXELS
}

fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, CaptureError> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let image = RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba).ok_or_else(|| {
        CaptureError::Encode {
            reason: "pixel buffer does not match image size".to_string(),
        }
    })?;

    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| CaptureError::Encode {
            reason: e.to_string(),
        })?;
    Ok(bytes.into_inner())
}
