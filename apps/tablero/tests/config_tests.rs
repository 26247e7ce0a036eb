//! Tests for client configuration resolution.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use std::collections::HashMap;
use tablero::ClientConfig;
use tablero::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use tablero_core::TableroError;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_toml_overrides_defaults() {
    let config =
        ClientConfig::from_toml_str("base_url = \"http://panel:8000/\"\ntimeout_secs = 5\n")
            .unwrap();
    assert_eq!(config.base_url, "http://panel:8000");
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = ClientConfig::from_toml_str("timeout_secs = 2").unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout_secs, 2);
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = ClientConfig::from_toml_str("base_uri = \"http://x\"").unwrap_err();
    assert!(matches!(err, TableroError::ConfigError(_)));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tablero.toml");
    std::fs::write(&path, "base_url = \"http://registros.local\"\n").unwrap();

    let config = ClientConfig::load_with(Some(path.as_path()), env(&[])).unwrap();
    assert_eq!(config.base_url, "http://registros.local");
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_load_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClientConfig::load_with(Some(dir.path().join("absent.toml").as_path()), env(&[])).unwrap_err();
    assert!(err.to_string().contains("Cannot read"));
}

#[test]
fn test_no_file_uses_defaults_and_env() {
    let config = ClientConfig::load_with(None, env(&[("TABLERO_URL", "http://env")])).unwrap();
    assert_eq!(config.base_url, "http://env");
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_env_overrides_file() {
    let config = ClientConfig::from_toml_str("base_url = \"http://file\"\ntimeout_secs = 5")
        .unwrap()
        .with_env(env(&[
            ("TABLERO_URL", "http://env/"),
            ("TABLERO_TIMEOUT_SECS", " 9 "),
        ]))
        .unwrap();
    assert_eq!(config.base_url, "http://env");
    assert_eq!(config.timeout_secs, 9);
}

#[test]
fn test_blank_env_url_is_ignored() {
    let config = ClientConfig::default()
        .with_env(env(&[("TABLERO_URL", "  ")]))
        .unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_bad_timeout_env_is_rejected() {
    let err = ClientConfig::default()
        .with_env(env(&[("TABLERO_TIMEOUT_SECS", "soon")]))
        .unwrap_err();
    assert!(err.to_string().contains("TABLERO_TIMEOUT_SECS"));
}

#[test]
fn test_zero_timeout_in_file_is_rejected() {
    let err = ClientConfig::from_toml_str("timeout_secs = 0").unwrap_err();
    assert!(matches!(err, TableroError::ConfigError(_)));
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn test_zero_timeout_env_is_rejected() {
    let err = ClientConfig::default()
        .with_env(env(&[("TABLERO_TIMEOUT_SECS", "0")]))
        .unwrap_err();
    assert!(matches!(err, TableroError::ConfigError(_)));
}

#[test]
fn test_url_flag_wins() {
    let config = ClientConfig::default()
        .with_env(env(&[("TABLERO_URL", "http://env")]))
        .unwrap()
        .with_url_override(Some("http://flag:5000//".to_string()));
    assert_eq!(config.base_url, "http://flag:5000");
}
