//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `WORKBOARD_API_BASE_URL` is set, the environment is authoritative
//! 2. Otherwise probes for a config file (JSON or TOML)
//! 3. With neither, built-in defaults apply
//!
//! ## Environment Variables
//! - `WORKBOARD_API_BASE_URL`: Backend base URL including `/api`
//! - `WORKBOARD_API_TIMEOUT_SECS`: Per-call timeout in seconds
//! - `WORKBOARD_API_MAX_ATTEMPTS`: Attempts per request (1 disables retry)
//! - `WORKBOARD_CREDENTIAL_BACKEND`: `file`, `keychain` or `memory`
//! - `WORKBOARD_CREDENTIAL_SLOT`: Name of the token slot
//! - `WORKBOARD_CREDENTIAL_PATH`: File used by the `file` backend
//! - `WORKBOARD_LOG_LEVEL`: `EnvFilter` directive
//! - `WORKBOARD_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes `workboard.{json,toml}` and `config.{json,toml}` in the
//! current directory, its two parents, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use workboard_domain::{
    ApiConfig, Config, CredentialBackend, CredentialConfig, LoggingConfig, Result,
    WorkboardError,
};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["workboard.json", "workboard.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `WorkboardError::Config` if a source is present but invalid.
pub fn load() -> Result<Config> {
    if std::env::var_os("WORKBOARD_API_BASE_URL").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    if probe_config_paths().is_some() {
        return load_from_file(None);
    }

    tracing::info!("No configuration source found, using defaults");
    Ok(Config::default())
}

/// Load configuration from environment variables
///
/// `WORKBOARD_API_BASE_URL` is required; every other variable falls back to
/// its default.
///
/// # Errors
/// Returns `WorkboardError::Config` if the base URL is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let api_defaults = ApiConfig::default();
    let credential_defaults = CredentialConfig::default();
    let logging_defaults = LoggingConfig::default();

    let api = ApiConfig {
        base_url: env_var("WORKBOARD_API_BASE_URL")?,
        timeout_seconds: env_parse("WORKBOARD_API_TIMEOUT_SECS", api_defaults.timeout_seconds)?,
        max_attempts: env_parse("WORKBOARD_API_MAX_ATTEMPTS", api_defaults.max_attempts)?,
    };
    if api.max_attempts == 0 {
        return Err(WorkboardError::Config("WORKBOARD_API_MAX_ATTEMPTS must be at least 1".into()));
    }

    let backend = match std::env::var("WORKBOARD_CREDENTIAL_BACKEND") {
        Ok(raw) => CredentialBackend::from_str(&raw)
            .map_err(|e| WorkboardError::Config(format!("Invalid credential backend: {e}")))?,
        Err(_) => credential_defaults.backend,
    };
    let credentials = CredentialConfig {
        backend,
        slot: std::env::var("WORKBOARD_CREDENTIAL_SLOT").unwrap_or(credential_defaults.slot),
        path: std::env::var_os("WORKBOARD_CREDENTIAL_PATH")
            .map_or(credential_defaults.path, PathBuf::from),
    };

    let logging = LoggingConfig {
        level: std::env::var("WORKBOARD_LOG_LEVEL").unwrap_or(logging_defaults.level),
        json: env_bool("WORKBOARD_LOG_JSON", logging_defaults.json),
    };

    Ok(Config { api, credentials, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// extension.
///
/// # Errors
/// Returns `WorkboardError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WorkboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            WorkboardError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| WorkboardError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WorkboardError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| WorkboardError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(WorkboardError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// Returns the first existing candidate.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.is_file())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        WorkboardError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| WorkboardError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
