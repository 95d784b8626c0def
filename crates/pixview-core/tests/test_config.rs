use std::io::Write;

use pixview_core::config::ViewerConfig;
use pixview_core::consts::{ACCEPTED_EXTENSIONS, ZOOM_STEP};
use pixview_core::error::PixviewError;

#[test]
fn test_default_config_is_valid() {
    let config = ViewerConfig::default();
    config.validate().unwrap();
    assert_eq!(config.zoom_step, ZOOM_STEP);
    assert_eq!(config.max_fit_scale, 1.0);
    assert_eq!(config.max_scale, None);
    assert_eq!(config.accepted_extensions.len(), ACCEPTED_EXTENSIONS.len());
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = ViewerConfig::from_toml_str("").unwrap();
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn test_partial_toml_overrides_fields() {
    let config = ViewerConfig::from_toml_str(
        r#"
        zoom_step = 1.25
        max_scale = 8.0
        accepted_extensions = ["png"]
        "#,
    )
    .unwrap();
    assert_eq!(config.zoom_step, 1.25);
    assert_eq!(config.max_scale, Some(8.0));
    assert_eq!(config.accepted_extensions, vec!["png".to_string()]);
    assert_eq!(config.max_fit_scale, 1.0);
}

#[test]
fn test_zoom_step_must_grow() {
    let err = ViewerConfig::from_toml_str("zoom_step = 1.0").unwrap_err();
    assert!(matches!(err, PixviewError::InvalidConfig(_)), "got: {err}");

    let err = ViewerConfig::from_toml_str("zoom_step = 0.5").unwrap_err();
    assert!(matches!(err, PixviewError::InvalidConfig(_)), "got: {err}");
}

#[test]
fn test_non_positive_caps_rejected() {
    assert!(ViewerConfig::from_toml_str("max_fit_scale = 0.0").is_err());
    assert!(ViewerConfig::from_toml_str("max_scale = -2.0").is_err());
    assert!(ViewerConfig::from_toml_str("window_width = 0.0").is_err());
}

#[test]
fn test_max_scale_below_fit_cap_rejected() {
    let err = ViewerConfig::from_toml_str("max_scale = 0.5").unwrap_err();
    assert!(matches!(err, PixviewError::InvalidConfig(_)), "got: {err}");

    let config = ViewerConfig::from_toml_str("max_scale = 1.0").unwrap();
    assert_eq!(config.max_scale, Some(1.0));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = ViewerConfig::from_toml_str("zoom_step = ").unwrap_err();
    assert!(matches!(err, PixviewError::ConfigParse(_)), "got: {err}");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "window_width = 1024.0").unwrap();
    writeln!(file, "window_height = 768.0").unwrap();
    file.flush().unwrap();

    let config = ViewerConfig::load(file.path()).unwrap();
    assert_eq!(config.window_width, 1024.0);
    assert_eq!(config.window_height, 768.0);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ViewerConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, PixviewError::Io(_)), "got: {err}");
}
