//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::ConvoConfig;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_convo_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, convo_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[endpoint]
base_url = "https://engine.example/v1/reasoningEngines/42"

[user]
user_id = "studente-7"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.endpoint.base_url, "https://engine.example/v1/reasoningEngines/42");
    assert_eq!(config.user.user_id, "studente-7");
    // Defaults preserved
    assert_eq!(config.chat.navigation_delay_ms, 1000);
    assert_eq!(config.endpoint.stream_suffix, ":streamQuery?alt=sse");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, convo_common::ConfigError::ParseError(_)));
}

#[test]
fn load_out_of_range_values_returns_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[chat]\nnavigation_delay_ms = 999999\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, convo_common::ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("chat.navigation_delay_ms"));
}

#[test]
fn create_default_config_writes_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("convo").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, ConvoConfig::default());
}

#[test]
fn template_is_valid_toml() {
    let parsed: Result<ConvoConfig, _> = toml::from_str(&default_config_toml());
    assert!(parsed.is_ok());
}

#[test]
fn default_config_path_ends_with_convo_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("convo/config.toml"));
    }
}
