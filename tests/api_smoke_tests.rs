use starplot_rs::api::{StarplotConfig, StarplotEngine};
use starplot_rs::core::Visibility;
use starplot_rs::render::{InMemoryScene, NullRenderer, PrimitiveKind, SceneBackend};

#[test]
fn engine_smoke_flow() {
    let config = StarplotConfig::new("stats", 5, vec![0.0; 5], vec![100.0; 5])
        .with_units(vec!["hp".to_owned(); 5]);
    let mut engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");

    assert_eq!(engine.axis_count(), 5);
    assert_eq!(engine.visibility(), Visibility::Visible);
    assert_eq!(
        engine
            .backend()
            .nodes_of_kind(PrimitiveKind::AxisLine)
            .count(),
        5
    );
    assert_eq!(
        engine
            .backend()
            .nodes_of_kind(PrimitiveKind::WedgeMesh)
            .count(),
        5
    );
    assert_eq!(engine.backend().nodes_of_kind(PrimitiveKind::Label).count(), 0);

    for _ in 0..10 {
        engine
            .update(&[100.0, 50.0, 0.0, 25.0, 75.0])
            .expect("update should succeed");
    }
    assert!(engine.current_data()[0] > 0.0);
    assert_eq!(engine.current_data()[2], 0.0);
    assert_eq!(engine.backend().nodes_of_kind(PrimitiveKind::Label).count(), 5);

    let mut renderer = NullRenderer::default();
    engine
        .render_preview(&mut renderer)
        .expect("preview should validate");
    assert_eq!(renderer.last_wedge_count, 5);
    assert_eq!(renderer.last_line_count, 5);
    assert_eq!(renderer.last_label_count, 5);

    let scene = engine.destroy().expect("destroy should succeed");
    assert!(scene.is_empty());
}

#[test]
fn primitives_are_parented_to_the_chart_root() {
    let config = StarplotConfig::new("stats", 3, vec![1.0; 3], vec![2.0; 3]);
    let engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");
    let scene = engine.backend();

    let root = scene.find("stats");
    for name in ["stats_Axis0", "stats_Axis2", "stats_Triangle1"] {
        let node = scene.node_by_name(name).expect("child primitive");
        assert_eq!(node.parent, root);
    }
}

#[test]
fn label_text_carries_rounded_value_and_unit() {
    let config = StarplotConfig::new("stats", 3, vec![41.6, 0.0, 0.0], vec![100.0; 3])
        .with_units(vec!["km".to_owned(), "kg".to_owned(), "s".to_owned()]);
    let mut engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");

    engine.update(&[41.6, 0.0, 0.0]).expect("update");

    let label = engine
        .backend()
        .node_by_name("stats_Axis0_label_main")
        .and_then(|node| node.label.clone())
        .expect("label submitted");
    assert_eq!(label.text, "42 km");
}

#[test]
fn axes_expose_direction_cap_and_color() {
    let config = StarplotConfig::new("stats", 4, vec![0.0; 4], vec![10.0, 20.0, 30.0, 40.0])
        .with_radius(2.0);
    let engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");

    let axes = engine.axes();
    assert_eq!(axes.len(), 4);
    assert_eq!(axes[3].max_value, 40.0);
    assert_eq!(axes[0].endpoint(engine.radius()), glam::DVec3::new(0.0, 0.0, 1.8));
    assert!(axes.iter().all(|axis| axis.index < 4));
}
