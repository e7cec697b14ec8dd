//! API-specific error types
//!
//! Classifies gateway failures for logging and converts them into
//! [`WorkboardError`] at the port boundary.

use std::time::Duration;

use thiserror::Error;
use workboard_domain::WorkboardError;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401 and 403
    Authentication,
    /// Other 4xx
    Client,
    /// 5xx
    Server,
    /// Connection failures and timeouts
    Network,
    /// Body did not match the expected shape
    Decode,
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("API Error: {status} {status_text}")]
    Status { status: u16, status_text: String, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub const fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Status { status: 401 | 403, .. } => ApiErrorCategory::Authentication,
            Self::Status { status: 500..=599, .. } => ApiErrorCategory::Server,
            Self::Status { .. } => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

impl From<WorkboardError> for ApiError {
    fn from(err: WorkboardError) -> Self {
        match err {
            WorkboardError::Http { status, status_text } => {
                Self::Status { status, status_text, body: String::new() }
            }
            WorkboardError::Unauthorized(status_text) => {
                Self::Status { status: 401, status_text, body: String::new() }
            }
            WorkboardError::Config(message) => Self::Config(message),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<ApiError> for WorkboardError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 401, status_text, .. } => Self::Unauthorized(status_text),
            ApiError::Status { status, status_text, .. } => Self::Http { status, status_text },
            ApiError::Network(message) => Self::Network(message),
            ApiError::Timeout(after) => Self::Network(format!("request timed out after {after:?}")),
            ApiError::Decode(message) => Self::Internal(format!("invalid response: {message}")),
            ApiError::Config(message) => Self::Config(message),
        }
    }
}
