//! Configuration structures
//!
//! Loaded by `workboard_infra::config` from environment variables or a
//! JSON/TOML file. Every section has defaults so partial files are accepted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS,
    DEFAULT_CREDENTIAL_FILE, DEFAULT_CREDENTIAL_SLOT,
};
use crate::impl_domain_status_conversions;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub credentials: CredentialConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:8000/api`
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Total attempts per request (initial try + retries). 1 disables retry.
    pub max_attempts: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_API_TIMEOUT_SECS,
            max_attempts: DEFAULT_API_MAX_ATTEMPTS,
        }
    }
}

/// Where the bearer credential is persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialBackend {
    /// JSON file holding named slots
    #[default]
    File,
    /// Operating system keychain
    Keychain,
    /// Process memory only; lost on exit
    Memory,
}

impl_domain_status_conversions!(CredentialBackend {
    File => "file",
    Keychain => "keychain",
    Memory => "memory",
});

/// Credential slot settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub backend: CredentialBackend,
    /// Name of the slot holding the token
    pub slot: String,
    /// File used by the `file` backend
    pub path: PathBuf,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            backend: CredentialBackend::default(),
            slot: DEFAULT_CREDENTIAL_SLOT.to_string(),
            path: PathBuf::from(DEFAULT_CREDENTIAL_FILE),
        }
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `workboard_infra=debug`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
