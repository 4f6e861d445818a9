//! Configuration loading, defaults, and validation.

mod common;

use mortui::config::{Config, ConfigError};
use std::io::Write;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn default_values() {
    let config = Config::default();

    assert_eq!(
        config.api.base_url,
        "https://rickandmortyapi.com/api/character/"
    );
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.app.initial_character, 1);
    assert_eq!(config.app.tick_ms, 250);
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("mortui/config.toml"));
}

#[test]
fn load_from_parses_toml() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://127.0.0.1:9999/character/"
timeout_seconds = 3

[app]
initial_character = 42
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:9999/character/");
    assert_eq!(config.api.timeout_seconds, 3);
    // Unset fields fall back to defaults.
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.app.initial_character, 42);
    assert_eq!(config.app.tick_ms, 250);
}

#[test]
fn empty_file_is_all_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn missing_explicit_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

// -- validation ----------------------------------------------------------------

#[test]
fn empty_base_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"\"\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn initial_character_out_of_range_fails_validation() {
    for bad in ["0", "827"] {
        let (_dir, path) = write_config(&format!("[app]\ninitial_character = {bad}\n"));
        let result = Config::load_from(&path);
        assert!(
            matches!(result, Err(ConfigError::ValidationError { .. })),
            "initial_character = {bad} should be rejected"
        );
    }
}

#[test]
fn zero_timeout_fails_validation() {
    let (_dir, path) = write_config("[api]\ntimeout_seconds = 0\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn zero_tick_fails_validation() {
    let (_dir, path) = write_config("[app]\ntick_ms = 0\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
