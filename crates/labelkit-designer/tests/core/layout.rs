use labelkit_designer::layout::{clamp_position, TextBoxLayout};
use labelkit_designer::types::{CanvasPoint, CanvasSize};
use labelkit_designer::InteractionError;
use proptest::prelude::*;

fn container() -> CanvasSize {
    // 62 x 30 mm at 96 DPI
    CanvasSize::new(234.33, 113.39)
}

fn footprint() -> CanvasSize {
    CanvasSize::new(40.0, 20.0)
}

fn assert_inside(layout: &TextBoxLayout, container: CanvasSize) {
    for b in layout.boxes() {
        let max_x = (container.width - b.footprint.width).max(0.0);
        let max_y = (container.height - b.footprint.height).max(0.0);
        assert!(b.x >= 0.0 && b.x <= max_x, "x out of range: {}", b);
        assert!(b.y >= 0.0 && b.y <= max_y, "y out of range: {}", b);
    }
}

#[test]
fn test_ids_reused_after_removing_highest() {
    let mut layout = TextBoxLayout::new();
    for _ in 0..3 {
        layout.add("t", footprint(), container());
    }
    assert_eq!(layout.ids(), vec![1, 2, 3]);
    layout.remove(3);
    assert_eq!(layout.add("t", footprint(), container()), 3);
    assert_eq!(layout.ids(), vec![1, 2, 3]);
}

#[test]
fn test_ids_not_compacted_after_removing_middle() {
    let mut layout = TextBoxLayout::new();
    for _ in 0..3 {
        layout.add("t", footprint(), container());
    }
    layout.remove(2);
    assert_eq!(layout.add("t", footprint(), container()), 4);
}

#[test]
fn test_remove_is_idempotent() {
    let mut layout = TextBoxLayout::new();
    let id = layout.add("t", footprint(), container());
    assert!(layout.remove(id).is_some());
    assert!(layout.remove(id).is_none());
    assert!(layout.is_empty());
}

#[test]
fn test_edit_accepts_empty_text() {
    let mut layout = TextBoxLayout::new();
    let id = layout.add("t", footprint(), container());
    assert!(layout.edit(id, ""));
    assert_eq!(layout.get(id).unwrap().text, "");
    assert!(!layout.edit(99, "x"));
}

#[test]
fn test_drag_follows_pointer_with_offset() {
    let mut layout = TextBoxLayout::new();
    let id = layout.add("t", footprint(), container());
    // Box 1 sits at (10, 10); grab it 5 px inside
    layout.start_drag(id, CanvasPoint::new(15.0, 15.0)).unwrap();
    let pos = layout.update_drag(CanvasPoint::new(55.0, 45.0), container());
    assert_eq!(pos, Some(CanvasPoint::new(50.0, 40.0)));
    assert_eq!(layout.end_drag(), Some(id));
    assert_eq!(layout.update_drag(CanvasPoint::new(0.0, 0.0), container()), None);
}

#[test]
fn test_second_drag_is_rejected() {
    let mut layout = TextBoxLayout::new();
    let a = layout.add("a", footprint(), container());
    let b = layout.add("b", footprint(), container());
    layout.start_drag(a, CanvasPoint::new(12.0, 12.0)).unwrap();
    assert_eq!(
        layout.start_drag(b, CanvasPoint::new(30.0, 30.0)),
        Err(InteractionError::DragInProgress { active: a })
    );
    assert_eq!(layout.dragging(), Some(a));
}

#[test]
fn test_drag_unknown_box() {
    let mut layout = TextBoxLayout::new();
    assert_eq!(
        layout.start_drag(7, CanvasPoint::default()),
        Err(InteractionError::UnknownBox(7))
    );
}

#[test]
fn test_drag_past_corner_is_clamped() {
    let mut layout = TextBoxLayout::new();
    let id = layout.add("t", footprint(), container());
    layout.start_drag(id, CanvasPoint::new(10.0, 10.0)).unwrap();
    let pos = layout
        .update_drag(CanvasPoint::new(1000.0, 1000.0), container())
        .unwrap();
    assert!((pos.x - (container().width - 40.0)).abs() < 1e-9);
    assert!((pos.y - (container().height - 20.0)).abs() < 1e-9);
}

#[test]
fn test_clamp_all_after_container_shrinks() {
    let mut layout = TextBoxLayout::new();
    let id = layout.add("t", footprint(), container());
    layout.move_to(id, 180.0, 90.0, container());
    let small = CanvasSize::new(100.0, 50.0);
    layout.clamp_all(small);
    assert_inside(&layout, small);
}

proptest! {
    #[test]
    fn prop_moves_stay_inside(
        moves in proptest::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..30),
        w in 1.0f64..400.0,
        h in 1.0f64..200.0,
    ) {
        let mut layout = TextBoxLayout::new();
        let fp = CanvasSize::new(w, h);
        let id = layout.add("t", fp, container());
        for (x, y) in moves {
            layout.move_to(id, x, y, container());
            let b = layout.get(id).unwrap();
            let (cx, cy) = clamp_position(x, y, fp, container());
            prop_assert_eq!((b.x, b.y), (cx, cy));
            prop_assert!(b.x >= 0.0 && b.y >= 0.0);
            prop_assert!(b.x <= (container().width - w).max(0.0));
            prop_assert!(b.y <= (container().height - h).max(0.0));
        }
    }

    #[test]
    fn prop_drag_stays_inside(
        start in (0.0f64..200.0, 0.0f64..100.0),
        path in proptest::collection::vec((-300.0f64..600.0, -300.0f64..600.0), 1..30),
    ) {
        let mut layout = TextBoxLayout::new();
        let id = layout.add("t", footprint(), container());
        layout.start_drag(id, CanvasPoint::from(start)).unwrap();
        for p in path {
            layout.update_drag(CanvasPoint::from(p), container());
            let b = layout.get(id).unwrap();
            prop_assert!(b.x >= 0.0 && b.x <= container().width - 40.0);
            prop_assert!(b.y >= 0.0 && b.y <= container().height - 20.0);
        }
    }

    #[test]
    fn prop_next_id_is_max_plus_one(removals in proptest::collection::vec(1u32..10, 0..10)) {
        let mut layout = TextBoxLayout::new();
        for _ in 0..9 {
            layout.add("t", footprint(), container());
        }
        for id in removals {
            layout.remove(id);
        }
        let expected = layout.ids().last().copied().unwrap_or(0) + 1;
        prop_assert_eq!(layout.next_id(), expected);
    }
}
