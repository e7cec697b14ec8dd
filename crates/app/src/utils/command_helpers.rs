//! Command execution helpers
//!
//! Times a command, logs the outcome and hands the result back unchanged.

use std::future::Future;
use std::time::Instant;

use workboard_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with timing and structured logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn delete_task(ctx: &AppContext, id: &str) -> Result<()> {
///     execute_logged("tasks::delete_task", || async {
///         ctx.gateway.delete_task(id).await
///     })
///     .await
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;
    log_command_execution(command_name, start.elapsed(), result.as_ref().err().map(error_label));
    result
}

/// Synchronous counterpart of [`execute_logged`] for local-only commands
pub fn execute_logged_sync<F, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> DomainResult<T>,
{
    let start = Instant::now();
    let result = command_fn();
    log_command_execution(command_name, start.elapsed(), result.as_ref().err().map(error_label));
    result
}

/// Reject blank required fields before any network call
pub fn require(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(workboard_domain::WorkboardError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}
