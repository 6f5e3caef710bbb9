#![cfg(feature = "cairo-backend")]

use starplot_rs::StarplotError;
use starplot_rs::api::{StarplotConfig, StarplotEngine};
use starplot_rs::render::{CairoPreviewRenderer, Color, InMemoryScene};

#[test]
fn cairo_preview_rejects_invalid_surface_size() {
    let err = CairoPreviewRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, StarplotError::InvalidData(_)));
}

#[test]
fn cairo_preview_draws_every_primitive() {
    let config = StarplotConfig::new("stats", 5, vec![0.0; 5], vec![100.0; 5]);
    let mut engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");
    engine.update(&[90.0, 60.0, 30.0, 80.0, 45.0]).expect("update");

    let mut renderer = CairoPreviewRenderer::new(400, 400).expect("renderer");
    engine.render_preview(&mut renderer).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.wedges_drawn, 5);
    assert_eq!(stats.lines_drawn, 5);
    assert_eq!(stats.labels_drawn, 5);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_preview_skips_hidden_charts() {
    let config = StarplotConfig::new("stats", 3, vec![1.0; 3], vec![1.0; 3]);
    let mut engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");
    engine.hide().expect("hide");

    let mut renderer = CairoPreviewRenderer::new(200, 200).expect("renderer");
    renderer.set_clear_color(Color::BLACK).expect("clear color");
    engine.render_preview(&mut renderer).expect("render");

    assert_eq!(renderer.last_stats().wedges_drawn, 0);
    assert!(renderer.set_clear_color(Color::rgba(2.0, 0.0, 0.0, 1.0)).is_err());
}
