//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use reqwest::Error as HttpError;
use workboard_domain::WorkboardError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub WorkboardError);

impl From<InfraError> for WorkboardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<WorkboardError> for InfraError {
    fn from(value: WorkboardError) -> Self {
        Self(value)
    }
}

trait IntoWorkboardError {
    fn into_workboard(self) -> WorkboardError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → WorkboardError */
/* -------------------------------------------------------------------------- */

impl IntoWorkboardError for KeyringError {
    fn into_workboard(self) -> WorkboardError {
        let description = self.to_string();

        match self {
            KeyringError::NoEntry => WorkboardError::NotFound("keychain entry not found".into()),
            KeyringError::BadEncoding(_) => {
                WorkboardError::Storage("credential in keychain is not valid UTF-8".into())
            }
            KeyringError::TooLong(name, limit) => WorkboardError::Storage(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            KeyringError::Invalid(attr, reason) => {
                WorkboardError::Storage(format!("keychain attribute '{attr}' is invalid: {reason}"))
            }
            KeyringError::Ambiguous(entries) => WorkboardError::Storage(format!(
                "multiple keychain entries matched request ({} results)",
                entries.len()
            )),
            KeyringError::PlatformFailure(err) => {
                WorkboardError::Storage(format!("keychain platform error: {err}"))
            }
            KeyringError::NoStorageAccess(err) => {
                WorkboardError::Storage(format!("unable to access secure storage: {err}"))
            }
            _ => WorkboardError::Storage(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        Self(value.into_workboard())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → WorkboardError */
/* -------------------------------------------------------------------------- */

impl IntoWorkboardError for HttpError {
    fn into_workboard(self) -> WorkboardError {
        if self.is_timeout() {
            return WorkboardError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return WorkboardError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return WorkboardError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
            return if code == 401 {
                WorkboardError::Unauthorized(status_text)
            } else {
                WorkboardError::Http { status: code, status_text }
            };
        }

        WorkboardError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_workboard())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error / serde → WorkboardError */
/* -------------------------------------------------------------------------- */

impl IntoWorkboardError for std::io::Error {
    fn into_workboard(self) -> WorkboardError {
        match self.kind() {
            std::io::ErrorKind::NotFound => WorkboardError::NotFound(self.to_string()),
            _ => WorkboardError::Storage(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        Self(value.into_workboard())
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        Self(WorkboardError::Storage(format!("invalid JSON: {value}")))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        Self(WorkboardError::Config(format!("Invalid TOML format: {value}")))
    }
}
