//! Workboard - headless dashboard sync
//!
//! Restores the stored session, loads the workspace and logs a summary of
//! the dashboard.

use anyhow::{Context, Result};
use chrono::Utc;
use workboard_app::commands;
use workboard_app::AppContext;
use workboard_core::views::{format, total_hours, weekly_summary};
use workboard_core::SessionState;
use workboard_infra::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so it can influence config and RUST_LOG
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialise tracing")?;
    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let mut ctx = AppContext::new_with_config(config)
        .await
        .context("failed to build application context")?;

    match commands::restore_session(&ctx).await {
        SessionState::Authenticated(profile) => {
            if let Err(err) = commands::refresh_dashboard_stats(&ctx).await {
                tracing::warn!(error = %err, "Dashboard stats unavailable");
            }
            log_summary(&ctx, &profile.id)?;
        }
        _ => tracing::info!("No stored session; sign in to load the workspace"),
    }

    ctx.shutdown().await;
    Ok(())
}

fn log_summary(ctx: &AppContext, user_id: &str) -> Result<()> {
    let snapshot = ctx.store.snapshot();
    let today = Utc::now().date_naive();
    let overview = commands::overview(ctx)?;

    tracing::info!(
        projects = snapshot.projects.len(),
        tasks = snapshot.tasks.len(),
        total_tasks = overview.total_tasks,
        completed = overview.completed_tasks,
        overdue = overview.overdue_tasks,
        at_risk = overview.at_risk_tasks,
        completion_rate = overview.completion_rate,
        "Dashboard"
    );

    let own_entries: Vec<_> =
        snapshot.time_entries.iter().filter(|entry| entry.user_id == user_id).collect();
    tracing::info!(hours = total_hours(&own_entries), "Time logged");

    for row in weekly_summary(&snapshot, user_id, today) {
        tracing::info!(project = %row.project, hours = %format::round_tenth(row.hours), "This week");
    }
    Ok(())
}
