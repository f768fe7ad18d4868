use labelkit_core::constants::PRINT_DPI;
use labelkit_designer::label::{Axis, LabelDocument, ViewRotation};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum FlagOp {
    Width(bool),
    Height(bool),
}

fn flag_op() -> impl Strategy<Value = FlagOp> {
    prop_oneof![
        any::<bool>().prop_map(FlagOp::Width),
        any::<bool>().prop_map(FlagOp::Height),
    ]
}

proptest! {
    #[test]
    fn prop_at_most_one_continuous_flag(ops in proptest::collection::vec(flag_op(), 0..40)) {
        let mut label = LabelDocument::new(62.0, 30.0);
        for op in ops {
            match op {
                FlagOp::Width(v) => label.set_continuous_width(v),
                FlagOp::Height(v) => label.set_continuous_height(v),
            }
            prop_assert!(!(label.is_continuous_width() && label.is_continuous_height()));
        }
    }

    #[test]
    fn prop_continuous_axis_respects_floor(declared in -1000.0f64..1000.0, width in any::<bool>()) {
        let mut label = LabelDocument::new(declared, declared);
        let axis = if width { Axis::Width } else { Axis::Height };
        label.set_continuous(axis, true);
        prop_assert!(label.actual(axis) >= label.continuous_floor_mm());
        if declared >= label.continuous_floor_mm() {
            prop_assert_eq!(label.actual(axis), declared);
        }
    }

    #[test]
    fn prop_render_dims_swap_under_rotation(w in 1.0f64..500.0, h in 1.0f64..500.0) {
        let mut label = LabelDocument::new(w, h);
        let (rw, rh) = (label.render_width(), label.render_height());
        label.toggle_rotation();
        prop_assert_eq!(label.render_width(), rh);
        prop_assert_eq!(label.render_height(), rw);
        prop_assert_eq!(label.actual_width(), w);
        prop_assert_eq!(label.actual_height(), h);
    }
}

#[test]
fn test_print_size_62_by_30() {
    let label = LabelDocument::new(62.0, 30.0);
    assert_eq!(label.print_size_px(PRINT_DPI), (732, 354));
}

#[test]
fn test_print_size_ignores_rotation() {
    let mut label = LabelDocument::new(40.0, 20.0);
    label.set_rotation(ViewRotation::Rotated);
    assert_eq!(label.print_size_px(PRINT_DPI), (472, 236));
}

#[test]
fn test_continuous_floor_override() {
    let mut label = LabelDocument::new(5.0, 5.0).with_continuous_floor(25.0);
    label.set_continuous_width(true);
    assert_eq!(label.actual_width(), 25.0);
    assert_eq!(label.resized_value(30.0, -10_000.0, 3.78), 25.0);
}

#[test]
fn test_zero_height_fixed_axis_is_kept() {
    let label = LabelDocument::new(62.0, 0.0);
    assert_eq!(label.actual_height(), 0.0);
    assert_eq!(label.print_size_px(PRINT_DPI), (732, 0));
}

#[test]
fn test_rotation_serializes_lowercase() {
    let json = serde_json::to_string(&ViewRotation::Rotated).unwrap();
    assert_eq!(json, "\"rotated\"");
}
