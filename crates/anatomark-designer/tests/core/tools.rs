use anatomark_core::Point;
use anatomark_designer::{DesignerState, DrawingTool, EditorMode, PendingCapture, Shape, ShapeKind};

fn drawing_state() -> DesignerState {
    let mut state = DesignerState::new();
    state.set_mode(EditorMode::Draw);
    state
}

fn freehand(state: &mut DesignerState, points: &[(f64, f64)]) -> Option<u64> {
    let (first, rest) = points.split_first()?;
    state.pointer_down(Point::new(first.0, first.1));
    for (x, y) in rest {
        state.pointer_move(Point::new(*x, *y));
    }
    state.pointer_up()
}

fn loop_ending_at(end: (f64, f64)) -> Vec<(f64, f64)> {
    vec![
        (0.0, 0.0),
        (40.0, 0.0),
        (80.0, 0.0),
        (80.0, 40.0),
        (40.0, 60.0),
        (10.0, 40.0),
        end,
    ]
}

#[test]
fn test_pen_loop_auto_closes_into_polygon() {
    let mut state = drawing_state();
    let id = freehand(&mut state, &loop_ending_at((5.0, 0.0))).unwrap();
    let shape = state.canvas.get_shape(id).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Polygon);
    match shape {
        Shape::Polygon(p) => assert_eq!(p.points.len(), 7),
        other => panic!("expected polygon, got {other:?}"),
    }
    assert_eq!(state.undo_depth(), 1);
}

#[test]
fn test_pen_loop_with_distant_ends_stays_open() {
    let mut state = drawing_state();
    let id = freehand(&mut state, &loop_ending_at((20.0, 0.0))).unwrap();
    let shape = state.canvas.get_shape(id).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Stroke);
    assert_eq!(shape.diagnosis(), None);
    assert!(!shape.filled());
}

#[test]
fn test_auto_close_needs_more_than_six_points() {
    let mut state = drawing_state();
    let short = [(0.0, 0.0), (40.0, 0.0), (80.0, 40.0), (40.0, 60.0), (10.0, 40.0), (5.0, 0.0)];
    let id = freehand(&mut state, &short).unwrap();
    assert_eq!(state.canvas.get_shape(id).unwrap().kind(), ShapeKind::Stroke);
}

#[test]
fn test_auto_closed_polygon_takes_pending_diagnosis() {
    let mut state = drawing_state();
    state.choose_diagnosis("Ulcer", "");
    let id = freehand(&mut state, &loop_ending_at((5.0, 0.0))).unwrap();
    let shape = state.canvas.get_shape(id).unwrap();
    assert_eq!(shape.diagnosis(), Some("Ulcer"));
    assert!(shape.filled());
}

#[test]
fn test_auto_mode_without_choice_leaves_polygon_plain() {
    let mut state = drawing_state();
    let id = freehand(&mut state, &loop_ending_at((5.0, 0.0))).unwrap();
    let shape = state.canvas.get_shape(id).unwrap();
    assert_eq!(shape.diagnosis(), None);
    assert!(!shape.filled());
}

#[test]
fn test_manual_mode_tags_other() {
    let mut state = drawing_state();
    assert!(!state.toggle_fill_mode());
    state.choose_diagnosis("Ulcer", "");
    let id = freehand(&mut state, &loop_ending_at((5.0, 0.0))).unwrap();
    let shape = state.canvas.get_shape(id).unwrap();
    assert_eq!(shape.diagnosis(), Some("Other"));
    assert!(shape.filled());
}

#[test]
fn test_open_strokes_are_never_auto_filled() {
    let mut state = drawing_state();
    state.choose_diagnosis("Polyp", "");
    let id = freehand(&mut state, &[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]).unwrap();
    assert_eq!(state.canvas.get_shape(id).unwrap().diagnosis(), None);

    state.toggle_fill_mode();
    let id = freehand(&mut state, &[(0.0, 50.0), (50.0, 50.0)]).unwrap();
    assert_eq!(state.canvas.get_shape(id).unwrap().diagnosis(), None);
}

#[test]
fn test_single_point_press_discards() {
    let mut state = drawing_state();
    state.pointer_down(Point::new(3.0, 3.0));
    state.pointer_move(Point::new(3.0, 3.0));
    assert!(state.pointer_up().is_none());
    assert_eq!(state.canvas.shape_count(), 0);
    assert_eq!(state.undo_depth(), 0);
}

#[test]
fn test_smoothed_tool_keeps_smoothed_points() {
    let mut state = drawing_state();
    state.set_tool(DrawingTool::Smoothed);
    let id = freehand(&mut state, &loop_ending_at((5.0, 0.0))).unwrap();
    match state.canvas.get_shape(id).unwrap() {
        Shape::Stroke(s) => {
            let smoothed = s.smoothed_points.as_ref().unwrap();
            assert_eq!(smoothed.len(), s.points.len());
            assert_eq!(smoothed[0], s.points[0]);
        }
        other => panic!("expected stroke, got {other:?}"),
    }
}

#[test]
fn test_line_tool_drag() {
    let mut state = drawing_state();
    state.set_tool(DrawingTool::Line);
    state.choose_diagnosis("Stricture", "");
    state.pointer_down(Point::new(10.0, 10.0));
    state.pointer_move(Point::new(60.0, 10.0));
    assert!(matches!(
        state.canvas.pending_capture(),
        Some(PendingCapture::Line(l)) if l.b == Point::new(60.0, 10.0)
    ));
    let id = state.pointer_up().unwrap();
    match state.canvas.get_shape(id).unwrap() {
        Shape::Line(l) => {
            assert_eq!(l.a, Point::new(10.0, 10.0));
            assert_eq!(l.b, Point::new(60.0, 10.0));
            assert_eq!(l.diagnosis, None);
        }
        other => panic!("expected line, got {other:?}"),
    }
    assert_eq!(state.tool(), DrawingTool::Line);
}

#[test]
fn test_polygon_tool_finish_reverts_to_pen() {
    let mut state = drawing_state();
    state.set_tool(DrawingTool::Polygon);
    state.choose_diagnosis("Other", "Appendicitis");
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)] {
        assert!(state.pointer_down(Point::new(x, y)).is_none());
        assert!(state.pointer_up().is_none());
    }
    let id = state.finish_polygon().unwrap();
    let shape = state.canvas.get_shape(id).unwrap();
    assert!(shape.is_polygon());
    assert_eq!(shape.diagnosis(), Some("Appendicitis"));
    assert!(shape.filled());
    assert_eq!(state.tool(), DrawingTool::Pen);
}

#[test]
fn test_polygon_tool_snap_close_on_press() {
    let mut state = drawing_state();
    state.set_tool(DrawingTool::Polygon);
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)] {
        state.pointer_down(Point::new(x, y));
    }
    let id = state.pointer_down(Point::new(8.0, 8.0)).unwrap();
    match state.canvas.get_shape(id).unwrap() {
        Shape::Polygon(p) => assert_eq!(p.points.len(), 3),
        other => panic!("expected polygon, got {other:?}"),
    }
    assert!(state.canvas.pending_capture().is_none());
    assert_eq!(state.tool(), DrawingTool::Pen);
}

#[test]
fn test_polygon_tool_two_vertices_make_a_line() {
    let mut state = drawing_state();
    state.toggle_fill_mode();
    state.set_tool(DrawingTool::Polygon);
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(100.0, 0.0));
    let id = state.finish_polygon().unwrap();
    let shape = state.canvas.get_shape(id).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Line);
    assert_eq!(shape.diagnosis(), Some("Other"));
    assert!(!shape.filled());
    assert_eq!(state.tool(), DrawingTool::Pen);
}

#[test]
fn test_polygon_tool_cancel_with_one_vertex() {
    let mut state = drawing_state();
    state.set_tool(DrawingTool::Polygon);
    state.pointer_down(Point::new(0.0, 0.0));
    assert!(state.finish_polygon().is_none());
    assert_eq!(state.status(), Some("Polygon cancelled"));
    assert_eq!(state.canvas.shape_count(), 0);
    assert_eq!(state.undo_depth(), 0);
    assert_eq!(state.tool(), DrawingTool::Polygon);
}

#[test]
fn test_gestures_ignored_outside_draw_mode() {
    let mut state = DesignerState::new();
    assert_eq!(state.mode(), EditorMode::Region);
    state.pointer_down(Point::new(0.0, 0.0));
    assert!(!state.pointer_move(Point::new(50.0, 0.0)));
    assert!(state.pointer_up().is_none());
    assert!(state.canvas.pending_capture().is_none());
}

#[test]
fn test_leaving_draw_mode_abandons_capture() {
    let mut state = drawing_state();
    state.set_tool(DrawingTool::Polygon);
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(50.0, 0.0));
    state.set_mode(EditorMode::Region);
    assert!(state.canvas.pending_capture().is_none());
    assert_eq!(state.tool(), DrawingTool::Pen);

    state.set_mode(EditorMode::Draw);
    state.set_tool(DrawingTool::Polygon);
    assert!(state.finish_polygon().is_none());
    assert_eq!(state.undo_depth(), 0);
}

#[test]
fn test_commit_clears_redo() {
    let mut state = drawing_state();
    freehand(&mut state, &[(0.0, 0.0), (10.0, 0.0)]);
    assert!(state.undo());
    assert!(state.can_redo());
    freehand(&mut state, &[(0.0, 20.0), (10.0, 20.0)]);
    assert!(!state.can_redo());
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let mut state = drawing_state();
    let a = freehand(&mut state, &[(0.0, 0.0), (10.0, 0.0)]).unwrap();
    state.undo();
    let b = freehand(&mut state, &[(0.0, 0.0), (10.0, 0.0)]).unwrap();
    state.reset();
    state.set_mode(EditorMode::Draw);
    let c = freehand(&mut state, &[(0.0, 0.0), (10.0, 0.0)]).unwrap();
    assert!(a < b && b < c);
}
