mod common;

use common::temp_config;
use habitdeck::config::{Config, ConfigError, API_URL_ENV, DEFAULT_BASE_URL};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("habitdeck/config.toml"));
}

#[test]
fn test_default_log_file_lives_under_habitdeck() {
    let path = Config::default().logging.file_path();
    assert!(path.ends_with("habitdeck/habitdeck.log"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://habits.internal:9000"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://habits.internal:9000");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_full_file() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://habits.example.com"
timeout_seconds = 10
connect_timeout_seconds = 2

[ui]
tick_rate_ms = 100

[logging]
level = "debug"
file = "/tmp/habitdeck-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.api.connect_timeout(), Duration::from_secs(2));
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file_path(),
        PathBuf::from("/tmp/habitdeck-test.log")
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_invalid_url_in_file_is_rejected() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "not a url"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let (_dir, path) = temp_config(
        r#"
[api]
timeout_seconds = 0
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_cli_override_replaces_invalid_file_url() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "not a url"
"#,
    );
    let config = Config::load_from(&path)
        .unwrap()
        .with_api_url(Some("http://good:8000".to_string()));
    assert_eq!(config.api.base_url, "http://good:8000");
    assert!(config.validate().is_ok());
}

#[test]
fn test_env_override_replaces_invalid_file_url() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "not a url"
"#,
    );
    let config = Config::load_from(&path)
        .unwrap()
        .apply_env_from(|_| Some("http://from-env:8000".to_string()));
    assert_eq!(config.api.base_url, "http://from-env:8000");
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_override_beats_file() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://from-file:8000"
"#,
    );
    let config = Config::load_from(&path)
        .unwrap()
        .with_api_url(Some("http://from-cli:8000".to_string()));
    assert_eq!(config.api.base_url, "http://from-cli:8000");
    assert!(config.validate().is_ok());
}

#[test]
fn test_absent_override_keeps_file_value() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://from-file:8000"
"#,
    );
    let config = Config::load_from(&path).unwrap().with_api_url(None);
    assert_eq!(config.api.base_url, "http://from-file:8000");
}

fn env_with_url(key: &str) -> Option<String> {
    (key == API_URL_ENV).then(|| "http://from-env:8000".to_string())
}

#[test]
fn test_env_override_beats_file() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://from-file:8000"
"#,
    );
    let config = Config::load_from(&path).unwrap().apply_env_from(env_with_url);
    assert_eq!(config.api.base_url, "http://from-env:8000");
}

#[test]
fn test_unset_env_keeps_file_value() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://from-file:8000"
"#,
    );
    let config = Config::load_from(&path).unwrap().apply_env_from(|_| None);
    assert_eq!(config.api.base_url, "http://from-file:8000");
}

#[test]
fn test_cli_override_beats_env() {
    let config = Config::default()
        .apply_env_from(env_with_url)
        .with_api_url(Some("http://from-cli:8000".to_string()));
    assert_eq!(config.api.base_url, "http://from-cli:8000");
}

#[test]
fn test_env_override_beats_default() {
    let config = Config::default().apply_env_from(env_with_url);
    assert_ne!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.base_url, "http://from-env:8000");
}
