//! Tests covering export configuration behavior.

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = ExportConfig::default();
    assert_eq!(cfg.vertex_capacity, DEFAULT_VERTEX_CAPACITY);
    assert_eq!(cfg.cell_capacity, DEFAULT_CELL_CAPACITY);
    assert_eq!(cfg.max_cell_vertices, MAX_CELL_VERTICES);
}

#[test]
fn default_agrees_with_global_default() {
    assert_eq!(ExportConfig::default(), ExportConfig::from(GlobalConfig::default()));
}

#[test]
fn builder_validates_input() {
    let err = ExportConfig::new(16, 4, 0).unwrap_err();
    assert_eq!(err, ExportConfigError(ConfigError::InvalidVertexLimit(0)));
    assert!(err.to_string().contains("max_cell_vertices"));
}

#[test]
fn with_max_cell_vertices_keeps_capacities() {
    let cfg = ExportConfig::new(10, 2, 100)
        .unwrap()
        .with_max_cell_vertices(6)
        .unwrap();
    assert_eq!(cfg, ExportConfig::new(10, 2, 6).unwrap());
    assert!(cfg.with_max_cell_vertices(0).is_err());
}

#[test]
fn builder_rejects_unreservable_capacity() {
    let third = usize::MAX / 3;
    assert_eq!(
        ExportConfig::new(third, 0, 1).unwrap_err(),
        ExportConfigError(ConfigError::InvalidCapacity(third))
    );
}

#[test]
fn config_serializes_every_limit() {
    let cfg = ExportConfig::new(10, 2, 6).unwrap();
    assert_eq!(
        serde_json::to_value(cfg).unwrap(),
        serde_json::json!({ "vertex_capacity": 10, "cell_capacity": 2, "max_cell_vertices": 6 })
    );
}
