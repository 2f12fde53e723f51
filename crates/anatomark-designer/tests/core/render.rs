use anatomark_core::{Point, Rgba};
use anatomark_designer::{
    rasterize, DesignerState, DiagnosisStyles, DrawItem, DrawingTool, EditorMode, FillPaint,
    LabelKind, Region, RegionTable, RenderOptions, RenderScene, StrokeRole,
};

fn regions() -> RegionTable {
    RegionTable::from_regions(vec![
        Region::new(
            "Liver",
            vec![
                Point::new(0.0, 0.0),
                Point::new(200.0, 0.0),
                Point::new(200.0, 200.0),
                Point::new(0.0, 200.0),
            ],
        ),
        Region::new(
            "Appendix",
            vec![
                Point::new(300.0, 300.0),
                Point::new(320.0, 300.0),
                Point::new(320.0, 320.0),
                Point::new(300.0, 320.0),
            ],
        ),
    ])
    .unwrap()
}

#[test]
fn test_region_labels_only_when_selected_or_diagnosed() {
    let table = regions();
    let mut state = DesignerState::with_regions(table.clone());
    let scene = RenderScene::build(&state, &table, None, &RenderOptions::default());
    assert_eq!(scene.labels().count(), 0);
    assert_eq!(scene.strokes_with_role(StrokeRole::RegionOutline), 2);

    state.toggle_region_selection("Liver");
    state.assign_diagnosis("Hepatomegaly");
    state.toggle_region_selection("Appendix");

    let scene = RenderScene::build(&state, &table, None, &RenderOptions::default());
    let labels: Vec<_> = scene.labels().collect();
    assert_eq!(labels.len(), 3);

    let liver = labels.iter().find(|l| l.text == "Liver").unwrap();
    assert_eq!(liver.position, Point::new(100.0, 100.0));
    let diagnosis = labels
        .iter()
        .find(|l| l.kind == LabelKind::RegionDiagnosis)
        .unwrap();
    assert_eq!(diagnosis.position, Point::new(100.0, 122.0));

    // small region: the first candidate above the centroid is already outside
    let appendix = labels.iter().find(|l| l.text == "Appendix").unwrap();
    assert_eq!(appendix.position, Point::new(310.0, 270.0));
}

#[test]
fn test_styles_drive_region_fill() {
    let table = regions();
    let styles = DiagnosisStyles::builtin();
    let mut state = DesignerState::with_regions(table.clone());
    state.toggle_region_selection("Liver");
    state.assign_diagnosis("Stones");

    let scene = RenderScene::build(&state, &table, Some(&styles), &RenderOptions::default());
    let (_, paint) = scene.fills().next().unwrap();
    match paint {
        FillPaint::Pattern { name, .. } => assert_eq!(name, "PATTERN_STONES"),
        other => panic!("expected pattern, got {other:?}"),
    }
}

#[test]
fn test_diagnosed_line_glows_and_selection_halos() {
    let table = RegionTable::empty();
    let styles = DiagnosisStyles::builtin();
    let mut state = DesignerState::new();
    state.set_mode(EditorMode::Draw);
    state.set_tool(DrawingTool::Line);
    state.pointer_down(Point::new(0.0, 10.0));
    state.pointer_move(Point::new(100.0, 10.0));
    let id = state.pointer_up().unwrap();
    state.toggle_shape_selection(id);
    state.assign_diagnosis("Bleeding");
    state.toggle_shape_selection(id);

    let scene = RenderScene::build(&state, &table, Some(&styles), &RenderOptions::default());
    let glow = scene
        .items
        .iter()
        .find_map(|item| match item {
            DrawItem::Stroke {
                role: StrokeRole::Glow,
                color,
                width,
                ..
            } => Some((*color, *width)),
            _ => None,
        })
        .unwrap();
    let expected: Rgba = styles.glow_color("Bleeding").unwrap();
    assert_eq!((expected.r, expected.g, expected.b), (255, 60, 60));
    assert_eq!(glow, (expected, 4.0 + 8.0));
    assert_eq!(scene.strokes_with_role(StrokeRole::Halo), 1);

    let label = scene.labels().next().unwrap();
    assert_eq!(label.kind, LabelKind::ShapeDiagnosis);
    assert_eq!(label.position, Point::new(50.0, 6.0));

    let hidden = RenderOptions {
        show_halo: false,
        ..RenderOptions::default()
    };
    let scene = RenderScene::build(&state, &table, Some(&styles), &hidden);
    assert_eq!(scene.strokes_with_role(StrokeRole::Halo), 0);
}

#[test]
fn test_pending_polygon_preview() {
    let table = RegionTable::empty();
    let mut state = DesignerState::new();
    state.set_mode(EditorMode::Draw);
    state.set_tool(DrawingTool::Polygon);
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(50.0, 0.0));

    let scene = RenderScene::build(&state, &table, None, &RenderOptions::default());
    assert_eq!(scene.strokes_with_role(StrokeRole::Preview), 1);
    let vertices = scene
        .items
        .iter()
        .filter(|i| matches!(i, DrawItem::Vertex { .. }))
        .count();
    assert_eq!(vertices, 2);
}

#[test]
fn test_rasterize_filled_polygon() {
    let table = RegionTable::empty();
    let mut state = DesignerState::new();
    state.set_mode(EditorMode::Draw);
    state.set_tool(DrawingTool::Polygon);
    state.choose_diagnosis("Hernia", "");
    for (x, y) in [(10.0, 10.0), (90.0, 10.0), (90.0, 90.0), (10.0, 90.0)] {
        state.pointer_down(Point::new(x, y));
    }
    state.finish_polygon().unwrap();

    let styles = DiagnosisStyles::builtin();
    let scene = RenderScene::build(&state, &table, Some(&styles), &RenderOptions::default());
    let pixmap = rasterize(&scene, 100, 100).unwrap();
    assert!(pixmap.pixel(50, 50).unwrap().alpha() > 0);
    assert_eq!(pixmap.pixel(2, 2).unwrap().alpha(), 0);
}
