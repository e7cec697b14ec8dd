use std::time::Duration;

use tracing::{info, warn};
use workboard_domain::WorkboardError;

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"tasks::create_task"`).
/// * `elapsed` - Duration the command execution took.
/// * `error_type` - Stable error label when the command failed.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&'static str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}

/// Convert a `WorkboardError` into a stable label suitable for logging.
#[inline]
pub const fn error_label(error: &WorkboardError) -> &'static str {
    match error {
        WorkboardError::Http { .. } => "http",
        WorkboardError::Unauthorized(_) => "unauthorized",
        WorkboardError::Network(_) => "network",
        WorkboardError::Config(_) => "config",
        WorkboardError::Auth(_) => "auth",
        WorkboardError::Storage(_) => "storage",
        WorkboardError::NotFound(_) => "not_found",
        WorkboardError::InvalidInput(_) => "invalid_input",
        WorkboardError::Internal(_) => "internal",
    }
}
