//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use meetnotify_domain::{BackendKind, BoundaryField};
use meetnotify_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "backend": "api",
        "api": {
            "base_url": "https://rapat.example.go.id/api",
            "timeout_secs": 20,
            "max_attempts": 2,
            "token": "json-token"
        },
        "schedule": {
            "timezone": "Asia/Jayapura",
            "boundary": "end_time",
            "page_size": 15
        },
        "logging": {
            "level": "meetnotify=debug",
            "json": true
        }
    }"#;
    let path = write_config(json_content, "json");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();
    let config = result.expect("Failed to load config from JSON file");

    assert_eq!(config.backend, BackendKind::Api);
    assert_eq!(config.api.base_url, "https://rapat.example.go.id/api");
    assert_eq!(config.api.timeout_secs, 20);
    assert_eq!(config.api.max_attempts, 2);
    assert_eq!(config.api.token.as_deref(), Some("json-token"));
    assert_eq!(config.schedule.timezone, "Asia/Jayapura");
    assert_eq!(config.schedule.boundary, BoundaryField::End);
    assert_eq!(config.schedule.page_size, 15);
    assert_eq!(config.logging.level, "meetnotify=debug");
    assert!(config.logging.json);
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
backend = "memory"

[schedule]
timezone = "UTC"
boundary = "start"

[logging]
level = "warn"
"#;
    let path = write_config(toml_content, "toml");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();
    let config = result.expect("Failed to load config from TOML file");

    assert_eq!(config.backend, BackendKind::Memory);
    assert_eq!(config.schedule.timezone, "UTC");
    assert_eq!(config.schedule.boundary, BoundaryField::Start);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.api.max_attempts, 3);
}

#[test]
fn test_load_config_with_minimal_fields() {
    let path = write_config("{}", "json");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();
    let config = result.expect("Failed to load config with minimal fields");

    assert_eq!(config, meetnotify_domain::Config::default());
}

#[test]
fn test_load_config_with_unknown_backend_fails() {
    let path = write_config(r#"{"backend": "sqlite"}"#, "json");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();

    assert!(result.is_err(), "Unknown backend should be rejected");
}
