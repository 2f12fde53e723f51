use anatomark_core::{Error, Point};
use anatomark_designer::{DiagnosisStyles, FillKind, RegionTable};
use tempfile::tempdir;

#[test]
fn test_region_table_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(
        &path,
        r#"[
            {"name": "Liver", "points": [{"x": 0, "y": 0}, {"x": 100, "y": 0}, {"x": 100, "y": 100}]},
            {"name": "Spleen", "points": [{"x": 200, "y": 0}, {"x": 300, "y": 0}, {"x": 300, "y": 100}]}
        ]"#,
    )
    .unwrap();

    let table = RegionTable::from_path(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.find_at(&Point::new(90.0, 10.0)).unwrap().name, "Liver");
    assert!(table.find_at(&Point::new(150.0, 10.0)).is_none());
}

#[test]
fn test_region_file_errors() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        RegionTable::from_path(dir.path().join("missing.json")),
        Err(Error::Io(_))
    ));

    let path = dir.path().join("regions.json");
    std::fs::write(&path, r#"[{"name": "Liver", "points": [{"x": 0, "y": 0}]}]"#).unwrap();
    assert!(RegionTable::from_path(&path).unwrap_err().is_region_error());
}

#[test]
fn test_style_catalog_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("styles.json");
    std::fs::write(
        &path,
        r##"{
            "__DEFAULT__": {"fillType": "color", "fillValue": "rgba(160,160,160,0.25)", "glowColor": "#a0a0a0"},
            "Stones": {"fillType": "pattern", "fillValue": "PATTERN_STONES"}
        }"##,
    )
    .unwrap();

    let styles = DiagnosisStyles::from_path(&path).unwrap();
    assert_eq!(styles.lookup("Stones").fill_type, FillKind::Pattern);
    assert_eq!(styles.lookup("Unlisted").fill_type, FillKind::Color);
    assert_eq!(styles.diagnosis_list(), vec!["Stones", "Other"]);
}

#[test]
fn test_style_file_without_default_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("styles.json");
    std::fs::write(&path, r#"{"Stones": {"fillType": "default"}}"#).unwrap();
    assert!(DiagnosisStyles::from_path(&path).unwrap_err().is_style_error());
}
