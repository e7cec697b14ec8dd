//! Session commands
//!
//! A successful sign-in, sign-up or restore triggers the bulk load; signing
//! out empties the store.

use tracing::{info, warn};
use workboard_core::{LoadReport, SessionState};
use workboard_domain::{Profile, Result};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Resume a stored session and load the workspace when it is valid
pub async fn restore_session(ctx: &AppContext) -> SessionState {
    let state = ctx.session.restore().await;
    if state.is_authenticated() {
        load_workspace(ctx).await;
    }
    state
}

pub async fn sign_in(ctx: &AppContext, email: &str, password: &str) -> Result<Profile> {
    let profile =
        execute_logged("session::sign_in", || ctx.session.sign_in(email, password)).await?;
    load_workspace(ctx).await;
    Ok(profile)
}

pub async fn sign_up(ctx: &AppContext, name: &str, email: &str, password: &str) -> Result<Profile> {
    let profile =
        execute_logged("session::sign_up", || ctx.session.sign_up(name, email, password)).await?;
    load_workspace(ctx).await;
    Ok(profile)
}

/// Stop the timer, empty the store and clear the credential
pub async fn sign_out(ctx: &AppContext) -> Result<()> {
    execute_logged("session::sign_out", || async {
        ctx.timer.cancel();
        ctx.store.reset();
        ctx.session.sign_out()
    })
    .await
}

/// Fetch every collection into the store
pub async fn load_workspace(ctx: &AppContext) -> LoadReport {
    let report = ctx.loader.load_all().await;
    if report.discarded {
        warn!(failed = ?report.failed, "Workspace load discarded; session ended");
    } else if report.is_complete() {
        info!("Workspace loaded");
    } else {
        warn!(failed = ?report.failed, "Workspace loaded with gaps");
    }
    report
}
