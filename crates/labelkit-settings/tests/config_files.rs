use labelkit_designer::FontWeight;
use labelkit_settings::{Config, MeasurementSystem, SettingsError};
use std::io::Write;

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "config.toml",
        r##"
[label]
width_mm = 62.0
height_mm = 29.0
units = "imperial"

[style]
font_size = 24.0
font_weight = "bold"
font_color = "#333"

[print]
default_printer = "Brother_QL_820NWB"
open_preview = false
"##,
    );

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.label.width_mm, 62.0);
    assert_eq!(config.label.continuous_floor_mm, 10.0);
    assert_eq!(config.label.units, MeasurementSystem::Imperial);
    assert_eq!(config.style.font_weight, FontWeight::Bold);
    assert_eq!(config.style.font_family, "Sans");
    assert_eq!(config.print.dpi, 300);
    assert_eq!(
        config.print.default_printer.as_deref(),
        Some("Brother_QL_820NWB")
    );
    assert!(!config.print.open_preview);
}

#[test]
fn test_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "config.json",
        r#"{ "print": { "dpi": 203, "preview_dir": "/tmp/labels" } }"#,
    );
    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.print.dpi, 203);
    assert_eq!(config.preview_dir(), std::path::PathBuf::from("/tmp/labels"));
    assert_eq!(config.capture_settings().dpi, 203);
}

#[test]
fn test_invalid_value_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "config.toml", "[print]\ncapture_scale = 0.0\n");
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "config.yaml", "label: {}\n");
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "config.toml", "[label\nwidth_mm = ");
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::TomlError(_))
    ));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        Config::load_or_default(Some(&missing)),
        Err(SettingsError::LoadError(_))
    ));
}
