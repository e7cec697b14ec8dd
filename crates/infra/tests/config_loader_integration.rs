//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use tempfile::{NamedTempFile, TempDir};
use workboard_core::CredentialStore;
use workboard_domain::{Config, CredentialBackend};
use workboard_infra::{config, credential_store};

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "api": {
            "base_url": "https://board.example.com/api",
            "timeout_seconds": 12,
            "max_attempts": 3
        },
        "credentials": {
            "backend": "memory",
            "slot": "integration_token"
        },
        "logging": {
            "level": "workboard_infra=debug",
            "json": true
        }
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("config should load");

    assert_eq!(config.api.base_url, "https://board.example.com/api");
    assert_eq!(config.api.timeout_seconds, 12);
    assert_eq!(config.api.max_attempts, 3);
    assert_eq!(config.credentials.backend, CredentialBackend::Memory);
    assert_eq!(config.credentials.slot, "integration_token");
    assert!(config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("workboard.toml");
    std::fs::write(
        &path,
        r#"
[credentials]
backend = "file"
path = "/tmp/workboard-integration.json"
"#,
    )
    .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("config should load");

    assert_eq!(config.api, Config::default().api);
    assert_eq!(config.credentials.backend, CredentialBackend::File);
    assert_eq!(
        config.credentials.path,
        std::path::PathBuf::from("/tmp/workboard-integration.json")
    );
}

#[test]
fn test_loaded_credentials_section_builds_a_working_store() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let creds_path = dir.path().join("creds.json");
    let config_path = dir.path().join("workboard.json");
    std::fs::write(
        &config_path,
        serde_json::json!({
            "credentials": { "backend": "file", "slot": "auth_token", "path": creds_path }
        })
        .to_string(),
    )
    .expect("Failed to write config");

    let config = config::load_from_file(Some(config_path)).expect("config should load");
    let store = credential_store(&config.credentials);

    store.store("tok-from-config").expect("store should succeed");
    assert_eq!(store.load().expect("load should succeed").as_deref(), Some("tok-from-config"));
    assert!(creds_path.exists());
}
