use anatomark_core::Point;
use anatomark_designer::{
    DesignerState, DrawingTool, EditorMode, Region, RegionTable, Shape, ShapeId,
};

fn draw_line(state: &mut DesignerState, y: f64) -> ShapeId {
    state.set_mode(EditorMode::Draw);
    state.set_tool(DrawingTool::Line);
    state.pointer_down(Point::new(0.0, y));
    state.pointer_move(Point::new(100.0, y));
    state.pointer_up().unwrap()
}

fn with_liver() -> DesignerState {
    let regions = RegionTable::from_regions(vec![Region::new(
        "Liver",
        vec![
            Point::new(300.0, 0.0),
            Point::new(400.0, 0.0),
            Point::new(400.0, 100.0),
        ],
    )])
    .unwrap();
    DesignerState::with_regions(regions)
}

fn order(state: &DesignerState) -> Vec<ShapeId> {
    state.canvas.shapes().map(Shape::id).collect()
}

#[test]
fn test_undo_redo_on_empty_stacks_are_noops() {
    let mut state = DesignerState::new();
    assert!(!state.undo());
    assert!(!state.redo());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn test_undo_add_then_redo() {
    let mut state = DesignerState::new();
    let id = draw_line(&mut state, 10.0);
    let snapshot = state.canvas.get_shape(id).cloned();

    assert!(state.undo());
    assert_eq!(state.canvas.shape_count(), 0);
    assert_eq!(state.redo_depth(), 1);
    assert_eq!(state.status(), Some("Undo: Add Shape"));

    assert!(state.redo());
    assert_eq!(state.canvas.get_shape(id).cloned(), snapshot);
    assert_eq!(state.undo_depth(), 1);
    assert_eq!(state.redo_depth(), 0);
}

#[test]
fn test_delete_records_one_entry_per_shape_and_restores_order() {
    let mut state = DesignerState::new();
    let a = draw_line(&mut state, 10.0);
    let b = draw_line(&mut state, 40.0);
    let c = draw_line(&mut state, 70.0);
    let d = draw_line(&mut state, 100.0);

    state.toggle_shape_selection(d);
    state.toggle_shape_selection(a);
    state.toggle_shape_selection(c);
    state.clear_selected();

    assert_eq!(order(&state), vec![b]);
    assert_eq!(state.undo_depth(), 4 + 3);
    assert!(state.canvas.selection().is_empty());

    for _ in 0..3 {
        assert!(state.undo());
    }
    assert_eq!(order(&state), vec![a, b, c, d]);

    for _ in 0..3 {
        assert!(state.redo());
    }
    assert_eq!(order(&state), vec![b]);
}

#[test]
fn test_history_limit_drops_oldest() {
    let mut state = DesignerState::new().with_history_limit(2);
    for i in 0..5 {
        draw_line(&mut state, i as f64 * 20.0);
    }
    assert_eq!(state.undo_depth(), 2);
    assert!(state.undo());
    assert!(state.undo());
    assert!(!state.undo());
    assert_eq!(state.canvas.shape_count(), 3);
}

#[test]
fn test_reset_is_not_undoable() {
    let mut state = DesignerState::new();
    let id = draw_line(&mut state, 10.0);
    state.toggle_shape_selection(id);
    state.assign_diagnosis("Scar");
    state.reset();

    assert_eq!(state.canvas.shape_count(), 0);
    assert!(state.canvas.selection().is_empty());
    assert!(state.canvas.region_diagnoses().is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.undo());
    assert_eq!(state.status(), Some("Reset all performed"));
}

#[test]
fn test_undo_history_names() {
    let mut state = DesignerState::new();
    let id = draw_line(&mut state, 10.0);
    state.toggle_shape_selection(id);
    state.assign_diagnosis("Scar");
    state.toggle_shape_selection(id);
    state.clear_selected();
    let names: Vec<_> = state.undo_history().collect();
    assert_eq!(names, vec!["Add Shape", "Diagnosis Change", "Delete Shape"]);
}

#[test]
fn test_undo_after_delete_keeps_diagnosis() {
    let mut state = DesignerState::new();
    let id = draw_line(&mut state, 10.0);
    state.toggle_shape_selection(id);
    state.assign_diagnosis("Varices");
    state.toggle_shape_selection(id);
    state.clear_selected();
    assert!(state.canvas.get_shape(id).is_none());

    assert!(state.undo());
    assert_eq!(state.canvas.get_shape(id).unwrap().diagnosis(), Some("Varices"));
    assert!(state.undo());
    assert_eq!(state.canvas.get_shape(id).unwrap().diagnosis(), None);
}

#[test]
fn test_assign_discards_redo() {
    let mut state = with_liver();
    let a = draw_line(&mut state, 10.0);
    draw_line(&mut state, 40.0);
    assert!(state.undo());
    assert_eq!(state.redo_depth(), 1);

    state.toggle_shape_selection(a);
    assert!(state.assign_diagnosis("Scar"));
    assert_eq!(state.undo_depth(), 2);
    assert_eq!(state.redo_depth(), 0);
    assert!(!state.redo());
    assert_eq!(state.canvas.shape_count(), 1);
}

#[test]
fn test_region_clear_discards_redo() {
    let mut state = with_liver();
    state.toggle_region_selection("Liver");
    assert!(state.assign_diagnosis("Ascites"));
    draw_line(&mut state, 10.0);
    assert!(state.undo());
    assert_eq!(state.redo_depth(), 1);

    state.toggle_region_selection("Liver");
    state.clear_selected();
    assert_eq!(state.canvas.region_diagnosis("Liver"), None);
    assert_eq!(state.undo_depth(), 2);
    assert_eq!(state.redo_depth(), 0);
    assert!(!state.can_redo());
}

#[test]
fn test_shape_delete_discards_redo() {
    let mut state = DesignerState::new();
    let a = draw_line(&mut state, 10.0);
    let b = draw_line(&mut state, 40.0);
    let c = draw_line(&mut state, 70.0);
    assert!(state.undo());
    assert!(state.undo());
    assert_eq!(state.redo_depth(), 2);

    state.toggle_shape_selection(a);
    state.clear_selected();
    assert_eq!(state.redo_depth(), 0);
    assert!(!state.redo());
    assert!(state.canvas.get_shape(b).is_none());
    assert!(state.canvas.get_shape(c).is_none());
    assert_eq!(state.canvas.shape_count(), 0);
}
