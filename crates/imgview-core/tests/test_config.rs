use glam::Vec2;

use imgview_core::config::ViewerConfig;
use imgview_core::error::ImgViewError;
use imgview_core::view::ViewState;

#[test]
fn test_defaults() {
    let config = ViewerConfig::default();
    assert_eq!(config.histogram_bins, 2048);
    assert_eq!(config.magnifier_size, 13);
    assert_eq!(config.min_zoom, 0.1);
    assert_eq!(config.max_zoom, 50.0);
    assert_eq!(config.wheel_zoom_step, 0.1);
    assert_eq!(config.crossline_color, [1.0, 1.0, 0.0, 0.5]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = ViewerConfig::from_toml_str("histogram_bins = 512\nmax_zoom = 20.0\n").unwrap();
    assert_eq!(config.histogram_bins, 512);
    assert_eq!(config.max_zoom, 20.0);
    assert_eq!(config.magnifier_size, 13);
    assert_eq!(config.min_zoom, 0.1);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(ViewerConfig::from_toml_str("").unwrap(), ViewerConfig::default());
}

#[test]
fn test_even_magnifier_is_rejected() {
    let err = ViewerConfig::from_toml_str("magnifier_size = 12").unwrap_err();
    assert!(matches!(err, ImgViewError::Config(_)), "{err}");
}

#[test]
fn test_inverted_zoom_limits_are_rejected() {
    let err = ViewerConfig::from_toml_str("min_zoom = 4.0\nmax_zoom = 2.0").unwrap_err();
    assert!(matches!(err, ImgViewError::Config(_)));
}

#[test]
fn test_out_of_range_colour_is_rejected() {
    let err = ViewerConfig::from_toml_str("crossline_color = [1.0, 2.0, 0.0, 1.0]").unwrap_err();
    assert!(matches!(err, ImgViewError::Config(_)));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let err = ViewerConfig::from_toml_str("histogram_bins = \"many\"").unwrap_err();
    assert!(matches!(err, ImgViewError::ConfigParse(_)));
}

#[test]
fn test_load_from_file_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewer.toml");
    std::fs::write(&path, "wheel_zoom_step = 0.25\n").unwrap();

    let config = ViewerConfig::load(Some(&path)).unwrap();
    assert_eq!(config.wheel_zoom_step, 0.25);
    assert_eq!(ViewerConfig::load(None).unwrap(), ViewerConfig::default());

    let err = ViewerConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ImgViewError::Io(_)));
}

#[test]
fn test_config_serializes_to_json() {
    let json = serde_json::to_value(ViewerConfig::default()).unwrap();
    assert_eq!(json["histogram_bins"], 2048);
    assert_eq!(json["magnifier_size"], 13);
}

#[test]
fn test_view_uses_configured_zoom_limits() {
    let config =
        ViewerConfig::from_toml_str("min_zoom = 0.5\nmax_zoom = 2.0\nwheel_zoom_step = 0.5")
            .unwrap();
    let mut view = ViewState::with_config(&config);
    assert_eq!(view.zoom_limits(), (0.5, 2.0));

    let centre = Vec2::new(50.0, 50.0);
    view.zoom_at(1.0, centre, Vec2::ZERO, Vec2::splat(100.0));
    assert_eq!(view.zoom, 1.5);
    view.zoom_at(1.0, centre, Vec2::ZERO, Vec2::splat(100.0));
    assert_eq!(view.zoom, 2.0);
}
