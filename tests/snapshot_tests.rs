use glam::DVec3;
use starplot_rs::api::{
    AxisSource, STARPLOT_SNAPSHOT_JSON_SCHEMA_V1, StarplotConfig, StarplotEngine,
    StarplotSnapshot,
};
use starplot_rs::core::Visibility;
use starplot_rs::error::StarplotError;
use starplot_rs::render::{Color, InMemoryScene};

#[test]
fn starplot_config_json_roundtrip() {
    let config = StarplotConfig::new("stats", 4, vec![1.0, 2.0, 3.0, 4.0], vec![10.0; 4])
        .with_position(DVec3::new(1.5, 0.0, -2.0))
        .with_radius(2.5)
        .with_colors(vec![Color::CYAN, Color::BLACK, Color::WHITE, Color::rgb(1.0, 0.5, 0.0)])
        .with_units(vec!["kg".to_owned(); 4])
        .with_data_ease_divisor(12.0);

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = StarplotConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn minimal_config_json_fills_in_defaults() {
    let json = r#"{
        "name": "stats",
        "axes": { "Count": 3 },
        "initial_data": [0.0, 0.0, 0.0],
        "axis_max": [1.0, 1.0, 1.0]
    }"#;
    let config = StarplotConfig::from_json_str(json).expect("minimal config");

    assert_eq!(config, StarplotConfig::new("stats", 3, vec![0.0; 3], vec![1.0; 3]));
    assert_eq!(config.axes, AxisSource::Count(3));
    assert_eq!(config.radius, 1.0);
    assert_eq!(config.data_ease_divisor, 30.0);
    assert_eq!(config.axis_ease_divisor, 5.0);
}

#[test]
fn malformed_config_json_is_invalid_data() {
    let err = StarplotConfig::from_json_str("{\"name\": 3}").expect_err("must fail");
    assert!(format!("{err}").contains("failed to parse config"));
}

#[test]
fn snapshot_captures_model_and_presentation() {
    let config = StarplotConfig::new("stats", 5, vec![0.0; 5], vec![100.0; 5])
        .with_units(vec!["pts".to_owned(); 5]);
    let mut engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");
    engine.update(&[30.0; 5]).expect("update");
    engine.hide().expect("hide");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.name, "stats");
    assert_eq!(snapshot.axis_count, 5);
    assert_eq!(snapshot.visibility, Visibility::Hidden);
    assert_eq!(snapshot.current_data, vec![1.0; 5]);
    assert_eq!(snapshot.axis_directions.len(), 5);
    assert_eq!(snapshot.bounding_scale, engine.bounding_scale());
    assert_eq!(snapshot.units.as_ref().map(Vec::len), Some(5));
}

#[test]
fn snapshot_json_contract_v1_roundtrip() {
    let config = StarplotConfig::new("stats", 6, vec![0.0; 6], vec![10.0; 6]);
    let mut engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");
    for _ in 0..7 {
        engine
            .update(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
            .expect("update");
    }

    let snapshot = engine.snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract should serialize");
    assert!(json.contains(&format!(
        "\"schema_version\": {STARPLOT_SNAPSHOT_JSON_SCHEMA_V1}"
    )));

    let restored = StarplotSnapshot::from_json_compat_str(&json).expect("contract should parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let config = StarplotConfig::new("stats", 3, vec![0.5; 3], vec![1.0; 3]);
    let engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");
    let snapshot = engine.snapshot();

    let json = serde_json::to_string(&snapshot).expect("bare snapshot");
    let restored = StarplotSnapshot::from_json_compat_str(&json).expect("bare snapshot parses");
    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_with_inconsistent_axis_vectors_is_rejected() {
    let config = StarplotConfig::new("stats", 4, vec![1.0; 4], vec![10.0; 4]);
    let engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");
    let mut snapshot = engine.snapshot();
    snapshot.current_data.pop();

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract should serialize");
    let err = StarplotSnapshot::from_json_compat_str(&json).expect_err("short data must fail");
    assert!(matches!(
        err,
        StarplotError::ShapeMismatch {
            field: "current_data",
            expected: 4,
            actual: 3
        }
    ));

    let bare = serde_json::to_string(&snapshot).expect("bare snapshot");
    assert!(StarplotSnapshot::from_json_compat_str(&bare).is_err());
}
