use labelkit_designer::{
    Axis, CanvasSize, FontWeight, LabelDocument, LabelEditor, TextStyle, DEFAULT_BOX_TEXT,
};

fn by_len(style: &TextStyle, text: &str) -> CanvasSize {
    CanvasSize::new(text.len() as f64 * style.font_size, style.font_size)
}

fn editor() -> LabelEditor {
    LabelEditor::with_measure(LabelDocument::new(62.0, 30.0), TextStyle::default(), by_len)
}

#[test]
fn test_id_reuse_scenario() {
    let mut editor = editor();
    editor.add_text_box(DEFAULT_BOX_TEXT);
    editor.add_text_box(DEFAULT_BOX_TEXT);
    assert_eq!(editor.layout().ids(), vec![1, 2, 3]);

    editor.remove_text_box(3);
    assert_eq!(editor.add_text_box("again"), 3);
    assert_eq!(editor.layout().ids(), vec![1, 2, 3]);
}

#[test]
fn test_new_boxes_cascade() {
    let mut editor = editor();
    let id = editor.add_text_box("ab");
    let b = editor.text_box(id).unwrap();
    assert_eq!((b.x, b.y), (25.0, 25.0));
}

#[test]
fn test_edit_remeasures() {
    let mut editor = editor();
    editor.edit_text(1, "abcdef").unwrap();
    assert_eq!(editor.text_box(1).unwrap().footprint.width, 96.0);
}

#[test]
fn test_style_change_remeasures_every_box() {
    let mut editor = editor();
    editor.add_text_box("xy");
    editor.set_style(TextStyle {
        font_size: 8.0,
        font_weight: FontWeight::Bold,
        ..TextStyle::default()
    });
    assert_eq!(editor.text_box(1).unwrap().footprint, CanvasSize::new(32.0, 8.0));
    assert_eq!(editor.text_box(2).unwrap().footprint, CanvasSize::new(16.0, 8.0));
    assert!(editor.style().is_bold());
}

#[test]
fn test_move_is_clamped() {
    let mut editor = editor();
    editor.move_text_box(1, -20.0, 500.0).unwrap();
    let b = editor.text_box(1).unwrap();
    assert_eq!(b.x, 0.0);
    assert!((b.y - (editor.container().height - 16.0)).abs() < 1e-9);
    assert!(editor.move_text_box(42, 0.0, 0.0).is_err());
}

#[test]
fn test_rotation_swaps_container_and_reclamps() {
    let mut editor = editor();
    let before = editor.container();
    editor.move_text_box(1, 1000.0, 0.0).unwrap();
    editor.toggle_rotation();
    let after = editor.container();
    assert_eq!((after.width, after.height), (before.height, before.width));

    let b = editor.text_box(1).unwrap();
    assert!(b.x + b.footprint.width <= after.width + 1e-9);
}

#[test]
fn test_continuous_flags_stay_exclusive() {
    let mut editor = editor();
    editor.set_continuous(Axis::Width, true);
    editor.set_continuous(Axis::Height, true);
    assert_eq!(editor.label().continuous_axis(), Some(Axis::Height));
}

#[test]
fn test_default_editor() {
    let editor = LabelEditor::default();
    assert_eq!(editor.label().width_mm(), 100.0);
    assert_eq!(editor.layout().len(), 1);
    assert!(!editor.has_surface());
}
