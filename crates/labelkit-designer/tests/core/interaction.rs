use labelkit_core::constants::DISPLAY_PX_PER_MM;
use labelkit_designer::{
    Axis, CanvasPoint, CanvasSize, InteractionError, InteractionState, LabelDocument, LabelEditor,
    PointerTarget, TextStyle,
};

fn fixed(_: &TextStyle, _: &str) -> CanvasSize {
    CanvasSize::new(40.0, 20.0)
}

fn editor_62x30() -> LabelEditor {
    LabelEditor::with_measure(LabelDocument::new(62.0, 30.0), TextStyle::default(), fixed)
}

#[test]
fn test_width_resize_by_37_8_px() {
    let mut editor = editor_62x30();
    editor.set_continuous(Axis::Width, true);

    let handle = CanvasPoint::new(62.0 * DISPLAY_PX_PER_MM, 15.0 * DISPLAY_PX_PER_MM);
    assert_eq!(
        editor.pointer_down(handle).unwrap(),
        PointerTarget::ResizeHandle(Axis::Width)
    );
    editor.pointer_move(CanvasPoint::new(handle.x + 37.8, handle.y + 25.0));
    editor.pointer_up();

    assert!((editor.label().width_mm() - 72.0).abs() < 0.01);
    assert_eq!(editor.label().height_mm(), 30.0);
    assert!(editor.interaction().is_idle());
}

#[test]
fn test_resize_never_goes_below_floor() {
    let mut editor = editor_62x30();
    editor.set_continuous(Axis::Height, true);
    editor
        .start_resize(Axis::Height, CanvasPoint::new(100.0, 100.0))
        .unwrap();
    editor.pointer_move(CanvasPoint::new(100.0, -5000.0));
    assert_eq!(editor.label().height_mm(), 10.0);
}

#[test]
fn test_rotated_width_handle_uses_vertical_delta() {
    let mut editor = editor_62x30();
    editor.set_continuous(Axis::Width, true);
    editor.toggle_rotation();

    // Rotated container is 30 x 62 mm; the width handle sits on the bottom edge
    let handle = CanvasPoint::new(15.0 * DISPLAY_PX_PER_MM, 62.0 * DISPLAY_PX_PER_MM);
    assert_eq!(
        editor.hit_test(handle),
        PointerTarget::ResizeHandle(Axis::Width)
    );
    editor.pointer_down(handle).unwrap();
    // Horizontal motion is ignored, vertical motion grows the width
    editor.pointer_move(CanvasPoint::new(handle.x + 50.0, handle.y + 37.8));
    assert!((editor.label().width_mm() - 72.0).abs() < 0.01);
}

#[test]
fn test_resize_scale_follows_zoom() {
    let mut editor = editor_62x30();
    editor.set_continuous(Axis::Width, true);
    editor.set_zoom(2.0);
    editor
        .start_resize(Axis::Width, CanvasPoint::new(0.0, 0.0))
        .unwrap();
    editor.pointer_move(CanvasPoint::new(20.0 * DISPLAY_PX_PER_MM, 0.0));
    assert!((editor.label().width_mm() - 72.0).abs() < 1e-9);
}

#[test]
fn test_resize_requires_continuous_axis() {
    let mut editor = editor_62x30();
    assert_eq!(
        editor.start_resize(Axis::Width, CanvasPoint::default()),
        Err(InteractionError::AxisNotContinuous(Axis::Width))
    );
    assert!(editor.interaction().is_idle());
}

#[test]
fn test_only_one_pointer_operation() {
    let mut editor = editor_62x30();
    editor.set_continuous(Axis::Width, true);

    editor
        .start_box_drag(1, CanvasPoint::new(15.0, 15.0))
        .unwrap();
    assert_eq!(editor.interaction(), InteractionState::DraggingBox(1));
    assert_eq!(
        editor.start_resize(Axis::Width, CanvasPoint::default()),
        Err(InteractionError::DragInProgress { active: 1 })
    );
    editor.pointer_up();

    editor
        .start_resize(Axis::Width, CanvasPoint::default())
        .unwrap();
    assert!(matches!(
        editor.start_box_drag(1, CanvasPoint::new(15.0, 15.0)),
        Err(InteractionError::OperationInProgress { .. })
    ));
    editor.pointer_up();
    assert!(editor.interaction().is_idle());
}

#[test]
fn test_pointer_drag_moves_box() {
    let mut editor = editor_62x30();
    assert_eq!(
        editor.pointer_down(CanvasPoint::new(20.0, 20.0)).unwrap(),
        PointerTarget::TextBox(1)
    );
    editor.pointer_move(CanvasPoint::new(70.0, 60.0));
    editor.pointer_up();
    let b = editor.text_box(1).unwrap();
    assert_eq!((b.x, b.y), (60.0, 50.0));
    assert_eq!(editor.layout().dragging(), None);
}

#[test]
fn test_pointer_drag_respects_zoom_and_pan() {
    let mut editor = editor_62x30();
    editor.set_zoom(2.0);
    editor.viewport_mut().set_pan(100.0, 100.0);
    // Box 1 at layout (10, 10) is at screen (120, 120)
    editor.pointer_down(CanvasPoint::new(130.0, 130.0)).unwrap();
    editor.pointer_move(CanvasPoint::new(150.0, 140.0));
    editor.pointer_up();
    let b = editor.text_box(1).unwrap();
    assert_eq!((b.x, b.y), (20.0, 15.0));
}

#[test]
fn test_delete_control_removes_box() {
    let mut editor = editor_62x30();
    // Box 1 spans (10, 10)-(50, 30); the control sits on (50, 10)
    assert_eq!(
        editor.pointer_down(CanvasPoint::new(50.0, 10.0)).unwrap(),
        PointerTarget::DeleteControl(1)
    );
    assert!(editor.layout().is_empty());
    assert!(editor.interaction().is_idle());
}

#[test]
fn test_pointer_on_empty_label_does_nothing() {
    let mut editor = editor_62x30();
    assert_eq!(
        editor.pointer_down(CanvasPoint::new(200.0, 100.0)).unwrap(),
        PointerTarget::Label
    );
    assert_eq!(
        editor.pointer_down(CanvasPoint::new(-5.0, 100.0)).unwrap(),
        PointerTarget::Outside
    );
    assert!(editor.interaction().is_idle());
}
