//! Raw action bridge for front ends that speak the `{type, payload}` form

use std::sync::Arc;

use workboard_core::{ActionEnvelope, AppState};
use workboard_domain::{Result, WorkboardError};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged_sync;

/// Decode a JSON action envelope and apply it to the store
///
/// Unknown action types leave the snapshot untouched.
pub fn dispatch_json(ctx: &AppContext, raw: &str) -> Result<Arc<AppState>> {
    execute_logged_sync("actions::dispatch_json", || {
        let envelope: ActionEnvelope = serde_json::from_str(raw)
            .map_err(|e| WorkboardError::InvalidInput(format!("malformed action: {e}")))?;
        ctx.store.dispatch_envelope(envelope)
    })
}

/// Current snapshot as JSON for rendering
pub fn snapshot_json(ctx: &AppContext) -> Result<serde_json::Value> {
    serde_json::to_value(ctx.store.snapshot().as_ref())
        .map_err(|e| WorkboardError::Internal(format!("snapshot not serializable: {e}")))
}
