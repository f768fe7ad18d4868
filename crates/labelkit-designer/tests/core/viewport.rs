use labelkit_core::constants::DISPLAY_PX_PER_MM;
use labelkit_designer::types::{CanvasPoint, CanvasSize};
use labelkit_designer::viewport::Viewport;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}

#[test]
fn test_identity_mapping() {
    let vp = Viewport::new();
    let p = vp.screen_to_layout(CanvasPoint::new(12.0, 34.0));
    assert_eq!(p, CanvasPoint::new(12.0, 34.0));
}

#[test]
fn test_screen_to_layout_with_zoom_and_pan() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.0);
    vp.set_pan(10.0, 20.0);
    // At zoom 2.0, 200 screen pixels = 100 layout pixels
    let layout = vp.screen_to_layout(CanvasPoint::new(210.0, 220.0));
    assert!((layout.x - 100.0).abs() < 0.01);
    assert!((layout.y - 100.0).abs() < 0.01);

    let back = vp.layout_to_screen(layout);
    assert!((back.x - 210.0).abs() < 0.01);
    assert!((back.y - 220.0).abs() < 0.01);
}

#[test]
fn test_positive_y_goes_down() {
    let vp = Viewport::new();
    let top = vp.layout_to_screen(CanvasPoint::new(0.0, 0.0));
    let lower = vp.layout_to_screen(CanvasPoint::new(0.0, 100.0));
    assert!(lower.y > top.y);
}

#[test]
fn test_zoom_limits_ignore_out_of_range() {
    let mut vp = Viewport::new();
    vp.set_zoom(0.05);
    assert_eq!(vp.zoom(), 1.0);
    vp.set_zoom(100.0);
    assert_eq!(vp.zoom(), 1.0);
    vp.zoom_in();
    assert!((vp.zoom() - 1.2).abs() < 1e-9);
    vp.zoom_out();
    assert!((vp.zoom() - 1.0).abs() < 1e-9);
}

#[test]
fn test_px_per_mm_scales_with_zoom() {
    let mut vp = Viewport::new();
    assert!((vp.px_per_mm() - DISPLAY_PX_PER_MM).abs() < 1e-12);
    vp.set_zoom(2.0);
    assert!((vp.px_per_mm() - 2.0 * DISPLAY_PX_PER_MM).abs() < 1e-12);
}

#[test]
fn test_fit_label_centres_content() {
    let mut vp = Viewport::new();
    vp.fit_label(
        CanvasSize::new(200.0, 100.0),
        CanvasSize::new(1000.0, 1000.0),
        0.1,
    );
    // 800 / 200 = 4.0 on x, 800 / 100 = 8.0 on y
    assert!((vp.zoom() - 4.0).abs() < 1e-9);
    assert!((vp.pan_x() - 100.0).abs() < 1e-9);
    assert!((vp.pan_y() - 300.0).abs() < 1e-9);
}

#[test]
fn test_fit_label_ignores_empty_label() {
    let mut vp = Viewport::new();
    vp.fit_label(CanvasSize::new(0.0, 10.0), CanvasSize::new(100.0, 100.0), 0.1);
    assert_eq!(vp, Viewport::new());
}

#[test]
fn test_reset() {
    let mut vp = Viewport::new();
    vp.set_zoom(3.0);
    vp.pan_by(5.0, 5.0);
    vp.reset();
    assert_eq!(vp, Viewport::default());
    assert_eq!(vp.to_string(), "Zoom: 1.00x | Pan: (0.0, 0.0)");
}
