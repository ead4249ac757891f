//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_rxshell_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, rxshell_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[app]
home_url = "https://app.example/"
host_marker = "app.example"

[progress]
completion_threshold = 80
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.app.home_url, "https://app.example/");
    assert_eq!(config.progress.completion_threshold, 80);
    // Defaults preserved
    assert_eq!(config.recovery.back_delay_ms, 100);
    assert_eq!(config.window.width, 1280);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, rxshell_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[progress]
completion_threshold = 150
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.progress.completion_threshold, 150);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rxshell").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.app.home_url, "https://rxresu.me/");
    assert_eq!(config.app.host_marker, "rxresu.me");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ShellConfig;

    let config: ShellConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn template_marks_mixed_content_as_inert() {
    use super::template::default_config_toml;

    let template = default_config_toml();
    let line = template
        .lines()
        .find(|l| l.contains("mixed_content"))
        .unwrap();
    assert!(line.contains("no effect"));
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("rxshell"));
        assert!(path_str.ends_with("config.toml"));
    }
}
