//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use super::template::default_config_toml;
use crate::schema::{AccelkitConfig, LogLevel};
use accelkit_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_accelkit_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[accel_map]
autosave = true

[logging]
level = "DEBUG"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(config.accel_map.autosave);
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert!(config.accel_map.autoload);
    assert_eq!(config.accelerators.default_modifier.len(), 6);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_keeps_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[accelerators]
default_modifier = ["capslock"]
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.accelerators.default_modifier, vec!["capslock"]);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accelkit").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert!(config.accel_map.autoload);
    assert!(config.accelerators.paths.is_empty());
}

#[test]
fn default_config_toml_is_valid() {
    let config: AccelkitConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_paths_are_reasonable() {
    // Needs a resolvable config directory; skipped silently where there is none.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("accelkit"));
        assert!(path_str.ends_with("config.toml"));
    }
    if let Ok(path) = default_accel_map_path() {
        assert!(path.ends_with("accelkit/accels"));
    }
}
