//! Label renderer.
//! Draws a [`LabelScene`] into a tiny-skia pixmap at an arbitrary
//! magnification. Text comes from rusttype glyph coverage blended into the
//! premultiplied buffer; decorations are tiny-skia paths.

use rusttype::{point as rt_point, Font, Scale};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use tracing::warn;

use crate::font_manager;
use crate::scene::{allocate_pixmap, delete_control_rect, LabelScene, RenderMode};
use crate::text_box::TextStyle;
use crate::types::CanvasRect;
use labelkit_core::constants::{BOX_PADDING_PX, LINE_HEIGHT_FACTOR};

fn label_border_color() -> Color {
    Color::from_rgba8(149, 165, 166, 255)
}
fn box_tint_color() -> Color {
    Color::from_rgba8(52, 152, 219, 28)
}
fn box_border_color() -> Color {
    Color::from_rgba8(52, 152, 219, 255)
}
fn delete_color() -> Color {
    Color::from_rgba8(231, 76, 60, 255)
}
fn handle_color() -> Color {
    Color::from_rgba8(41, 128, 185, 255)
}

/// Anything that can produce a bitmap of the label scene.
///
/// The capture pipeline only needs this; the editor holds it as an optional
/// attachment and reports "not ready" without one.
pub trait LabelSurface: Send + Sync {
    /// Renders `scene` at `scale` x layout size. `None` means the pixel
    /// buffer could not be allocated, including buffers above
    /// `MAX_RENDER_PIXELS`.
    fn snapshot(&self, scene: &LabelScene<'_>, mode: RenderMode, scale: f32) -> Option<Pixmap>;
}

/// Software surface backed by tiny-skia.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkiaSurface;

impl SkiaSurface {
    pub fn new() -> Self {
        Self
    }
}

impl LabelSurface for SkiaSurface {
    fn snapshot(&self, scene: &LabelScene<'_>, mode: RenderMode, scale: f32) -> Option<Pixmap> {
        let (width, height) = scene.pixel_size(scale);
        let mut pixmap = allocate_pixmap(width, height)?;

        let transform = Transform::from_scale(scale, scale);

        if mode.shows_decorations() {
            for text_box in scene.boxes {
                fill_rect(&mut pixmap, text_box.bounds(), box_tint_color(), transform);
                stroke_rect(&mut pixmap, text_box.bounds(), box_border_color(), 1.0, transform);
            }
        }

        if let Some(font) = font_manager::font_for_style(scene.style) {
            let color = text_color(scene.style);
            for text_box in scene.boxes {
                draw_text(
                    &mut pixmap,
                    font,
                    scene.style,
                    color,
                    text_box.x,
                    text_box.y,
                    &text_box.text,
                    scale,
                );
            }
        }

        if mode.shows_decorations() {
            let border = CanvasRect::new(0.0, 0.0, scene.size.width, scene.size.height);
            stroke_rect(&mut pixmap, border, label_border_color(), 1.0, transform);

            for text_box in scene.boxes {
                draw_delete_control(
                    &mut pixmap,
                    delete_control_rect(text_box, scene.control_size),
                    transform,
                );
            }
            for handle in &scene.handles {
                fill_rect(&mut pixmap, handle.rect, handle_color(), transform);
            }
        }

        Some(pixmap)
    }
}

fn text_color(style: &TextStyle) -> Color {
    match style.rgb() {
        Some((r, g, b)) => Color::from_rgba8(r, g, b, 255),
        None => {
            warn!("Invalid font color '{}', using black", style.font_color);
            Color::BLACK
        }
    }
}

fn to_skia_rect(rect: CanvasRect) -> Option<Rect> {
    Rect::from_xywh(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    )
}

fn fill_rect(pixmap: &mut Pixmap, rect: CanvasRect, color: Color, transform: Transform) {
    let Some(r) = to_skia_rect(rect) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    let path = PathBuilder::from_rect(r);
    pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
}

fn stroke_rect(pixmap: &mut Pixmap, rect: CanvasRect, color: Color, width: f32, transform: Transform) {
    let Some(r) = to_skia_rect(rect) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    let stroke = Stroke {
        width,
        ..Default::default()
    };
    let path = PathBuilder::from_rect(r);
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
}

fn draw_delete_control(pixmap: &mut Pixmap, rect: CanvasRect, transform: Transform) {
    fill_rect(pixmap, rect, delete_color(), transform);

    let inset = rect.width * 0.25;
    let mut pb = PathBuilder::new();
    pb.move_to((rect.x + inset) as f32, (rect.y + inset) as f32);
    pb.line_to((rect.right() - inset) as f32, (rect.bottom() - inset) as f32);
    pb.move_to((rect.right() - inset) as f32, (rect.y + inset) as f32);
    pb.line_to((rect.x + inset) as f32, (rect.bottom() - inset) as f32);
    if let Some(path) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color(Color::WHITE);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: 1.5,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }
}

/// Draws each line of `text` with its top-left at the box's padded origin.
#[allow(clippy::too_many_arguments)]
fn draw_text(
    pixmap: &mut Pixmap,
    font: &Font<'_>,
    style: &TextStyle,
    color: Color,
    box_x: f64,
    box_y: f64,
    text: &str,
    scale: f32,
) {
    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let font_px = style.font_size as f32 * scale;
    let rt_scale = Scale::uniform(font_px);
    let ascent = font.v_metrics(rt_scale).ascent;
    let line_height = (style.font_size * LINE_HEIGHT_FACTOR) as f32 * scale;
    let origin_x = (box_x + BOX_PADDING_PX) as f32 * scale;
    let origin_y = (box_y + BOX_PADDING_PX) as f32 * scale;

    let (r, g, b) = (color.red(), color.green(), color.blue());
    let data = pixmap.data_mut();

    for (line_index, line) in text.lines().enumerate() {
        let baseline = origin_y + line_index as f32 * line_height + ascent;
        for glyph in font.layout(line, rt_scale, rt_point(origin_x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let (Ok(px), Ok(py)) = (
                    usize::try_from(i64::from(gx) + i64::from(bb.min.x)),
                    usize::try_from(i64::from(gy) + i64::from(bb.min.y)),
                ) else {
                    return;
                };
                if px >= width || py >= height || coverage <= 0.0 {
                    return;
                }
                let idx = (py * width + px) * 4;
                blend_src_over(&mut data[idx..idx + 4], r, g, b, coverage.min(1.0));
            });
        }
    }
}

/// Source-over of an opaque color at `coverage` onto a premultiplied pixel.
fn blend_src_over(pixel: &mut [u8], r: f32, g: f32, b: f32, coverage: f32) {
    let inv = 1.0 - coverage;
    let channel = |src: f32, dst: u8| -> u8 {
        (src * 255.0 * coverage + f32::from(dst) * inv).round().clamp(0.0, 255.0) as u8
    };
    pixel[0] = channel(r, pixel[0]);
    pixel[1] = channel(g, pixel[1]);
    pixel[2] = channel(b, pixel[2]);
    pixel[3] = channel(1.0, pixel[3]);
}
