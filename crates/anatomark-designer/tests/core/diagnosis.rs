use anatomark_core::Point;
use anatomark_designer::{
    DesignerState, DrawingTool, EditorMode, Region, RegionTable, ShapeId, ShapeKind,
};

fn state() -> DesignerState {
    let regions = RegionTable::from_regions(vec![
        Region::new(
            "Liver",
            vec![
                Point::new(300.0, 0.0),
                Point::new(500.0, 0.0),
                Point::new(500.0, 200.0),
                Point::new(300.0, 200.0),
            ],
        ),
        Region::new(
            "Spleen",
            vec![
                Point::new(600.0, 0.0),
                Point::new(700.0, 0.0),
                Point::new(700.0, 100.0),
            ],
        ),
    ])
    .unwrap();
    let mut state = DesignerState::with_regions(regions);
    state.set_mode(EditorMode::Draw);
    state
}

fn draw_stroke(state: &mut DesignerState) -> ShapeId {
    state.set_tool(DrawingTool::Pen);
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_move(Point::new(40.0, 10.0));
    state.pointer_move(Point::new(80.0, 0.0));
    state.pointer_up().unwrap()
}

fn draw_polygon(state: &mut DesignerState) -> ShapeId {
    state.set_tool(DrawingTool::Polygon);
    for (x, y) in [(0.0, 100.0), (100.0, 100.0), (100.0, 200.0)] {
        state.pointer_down(Point::new(x, y));
    }
    state.finish_polygon().unwrap()
}

#[test]
fn test_polyp_on_open_stroke_and_polygon() {
    let mut state = state();
    let stroke = draw_stroke(&mut state);
    let polygon = draw_polygon(&mut state);

    state.toggle_shape_selection(stroke);
    state.assign_diagnosis("Polyp");
    let s = state.canvas.get_shape(stroke).unwrap();
    assert_eq!(s.kind(), ShapeKind::Stroke);
    assert_eq!(s.diagnosis(), Some("Polyp"));
    assert!(!s.filled());

    state.toggle_shape_selection(polygon);
    state.assign_diagnosis("Polyp");
    let p = state.canvas.get_shape(polygon).unwrap();
    assert_eq!(p.diagnosis(), Some("Polyp"));
    assert!(p.filled());
}

#[test]
fn test_two_shapes_undo_in_one_step() {
    let mut state = state();
    let stroke = draw_stroke(&mut state);
    let polygon = draw_polygon(&mut state);
    let depth = state.undo_depth();

    state.toggle_shape_selection(stroke);
    state.toggle_shape_selection(polygon);
    assert!(state.assign_diagnosis("Ulcer"));
    assert_eq!(state.undo_depth(), depth + 1);
    assert!(state.canvas.selection().is_empty());

    assert!(state.undo());
    for id in [stroke, polygon] {
        let shape = state.canvas.get_shape(id).unwrap();
        assert_eq!(shape.diagnosis(), None);
        assert!(!shape.filled());
    }
}

#[test]
fn test_region_assignment_and_undo() {
    let mut state = state();
    state.toggle_region_selection("Liver");
    state.toggle_region_selection("Spleen");
    assert!(state.assign_diagnosis("Hepatomegaly"));
    assert_eq!(state.canvas.region_diagnosis("Liver"), Some("Hepatomegaly"));
    assert_eq!(state.canvas.region_diagnosis("Spleen"), Some("Hepatomegaly"));

    assert!(state.undo());
    assert!(state.canvas.region_diagnoses().is_empty());
    assert!(state.redo());
    assert_eq!(state.canvas.region_diagnoses().len(), 2);
}

#[test]
fn test_blank_label_is_ignored() {
    let mut state = state();
    let stroke = draw_stroke(&mut state);
    state.toggle_shape_selection(stroke);
    let depth = state.undo_depth();
    assert!(!state.assign_diagnosis("   "));
    assert_eq!(state.undo_depth(), depth);
    assert!(state.canvas.selection().is_shape_selected(stroke));
}

#[test]
fn test_assign_with_empty_selection_records_nothing() {
    let mut state = state();
    state.choose_diagnosis("Ulcer", "");
    assert!(!state.assign_diagnosis("Ulcer"));
    assert_eq!(state.undo_depth(), 0);
    assert_eq!(state.pending_diagnosis(), None);
}

#[test]
fn test_assign_trims_label() {
    let mut state = state();
    state.toggle_region_selection("Liver");
    state.assign_diagnosis("  Ascites ");
    assert_eq!(state.canvas.region_diagnosis("Liver"), Some("Ascites"));
}

#[test]
fn test_clear_single_region_diagnosis() {
    let mut state = state();
    state.toggle_region_selection("Liver");
    state.assign_diagnosis("Hepatomegaly");
    let depth = state.undo_depth();

    state.toggle_region_selection("Liver");
    state.clear_selected();
    assert_eq!(state.canvas.region_diagnosis("Liver"), None);
    assert_eq!(state.undo_depth(), depth + 1);
    assert!(state.canvas.selection().is_empty());
    assert_eq!(state.status(), Some("Cleared diagnosis for Liver"));

    assert!(state.undo());
    assert_eq!(state.canvas.region_diagnosis("Liver"), Some("Hepatomegaly"));
}

#[test]
fn test_clear_undiagnosed_region_records_nothing() {
    let mut state = state();
    state.toggle_region_selection("Spleen");
    state.clear_selected();
    assert_eq!(state.undo_depth(), 0);
    assert!(state.canvas.selection().is_empty());
}

#[test]
fn test_clear_with_two_regions_is_noop() {
    let mut state = state();
    state.toggle_region_selection("Liver");
    state.toggle_region_selection("Spleen");
    state.assign_diagnosis("Ascites");
    state.toggle_region_selection("Liver");
    state.toggle_region_selection("Spleen");
    let depth = state.undo_depth();

    state.clear_selected();
    assert_eq!(state.undo_depth(), depth);
    assert_eq!(state.canvas.region_diagnoses().len(), 2);
    assert_eq!(state.canvas.selection().selected_regions().len(), 2);
}
