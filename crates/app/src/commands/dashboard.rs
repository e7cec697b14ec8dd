//! Dashboard commands
//!
//! Stats come from the backend when it answers and are computed from the
//! snapshot otherwise.

use chrono::Utc;
use tracing::warn;
use workboard_core::views::{local_stats, status_overview, StatusOverview};
use workboard_core::AppAction;
use workboard_domain::{DashboardStats, Result};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Refresh the dashboard counters and store them
pub async fn refresh_dashboard_stats(ctx: &AppContext) -> Result<DashboardStats> {
    execute_logged("dashboard::refresh_dashboard_stats", || async {
        let stats = match ctx.gateway.dashboard_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                let user_id = ctx.require_user_id()?;
                warn!(error = %err, "Dashboard stats unavailable, computing locally");
                local_stats(&ctx.store.snapshot(), &user_id, Utc::now())
            }
        };
        ctx.store.dispatch(AppAction::SetDashboardStats(Some(stats)));
        Ok(stats)
    })
    .await
}

/// Headline figures from the stored stats, or local ones when none are stored
pub fn overview(ctx: &AppContext) -> Result<StatusOverview> {
    let snapshot = ctx.store.snapshot();
    let now = Utc::now();
    let stats = match snapshot.dashboard_stats {
        Some(stats) => stats,
        None => local_stats(&snapshot, &ctx.require_user_id()?, now),
    };
    Ok(status_overview(&snapshot, &stats, now))
}
