//! Time logging and the tracking timer
//!
//! Logged time goes through `POST /time-entries`. Edits and deletions have
//! no endpoint and only change the local collection.

use tokio::sync::watch;
use tracing::{debug, info};
use workboard_core::{AppAction, TimeEntryQuery};
use workboard_domain::{NewTimeEntry, Result, TimeEntry, WorkboardError};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_logged, execute_logged_sync, require};

/// Re-fetch time entries matching `query` into the store
pub async fn refresh_time_entries(ctx: &AppContext, query: &TimeEntryQuery) -> Result<usize> {
    execute_logged("time_entries::refresh_time_entries", || {
        ctx.loader.reload_time_entries(query)
    })
    .await
}

pub async fn log_time(ctx: &AppContext, entry: NewTimeEntry) -> Result<TimeEntry> {
    execute_logged("time_entries::log_time", || record(ctx, &entry)).await
}

/// Start tracking; the receiver yields elapsed whole seconds once per second
pub fn start_timer(
    ctx: &AppContext,
    task_id: &str,
    project_id: &str,
    description: &str,
) -> Result<watch::Receiver<u64>> {
    execute_logged_sync("time_entries::start_timer", || {
        ctx.require_user_id()?;
        ctx.timer.start(task_id, project_id, description)
    })
}

/// Stop tracking and record the session
///
/// Returns `None` when no timer was running or the session was shorter
/// than a minute.
pub async fn stop_timer(ctx: &AppContext) -> Result<Option<TimeEntry>> {
    execute_logged("time_entries::stop_timer", || async {
        let user_id = ctx.require_user_id()?;
        let Some(entry) = ctx.timer.stop(&user_id) else {
            debug!("No time entry produced by timer");
            return Ok(None);
        };
        record(ctx, &entry).await.map(Some)
    })
    .await
}

/// Discard the running session without recording it
pub fn cancel_timer(ctx: &AppContext) {
    ctx.timer.cancel();
}

/// Replace a time entry in the local collection
pub fn update_time_entry(ctx: &AppContext, entry: TimeEntry) -> Result<TimeEntry> {
    execute_logged_sync("time_entries::update_time_entry", || {
        validate_minutes(entry.duration)?;
        let snapshot = ctx.store.snapshot();
        if snapshot.time_entry(&entry.id).is_none() {
            return Err(WorkboardError::NotFound(format!("time entry {}", entry.id)));
        }

        let entries: Vec<TimeEntry> = snapshot
            .time_entries
            .iter()
            .map(|existing| if existing.id == entry.id { entry.clone() } else { existing.clone() })
            .collect();
        ctx.store.dispatch(AppAction::SetTimeEntries(entries));
        Ok(entry.clone())
    })
}

/// Remove a time entry from the local collection; `false` if it was absent
pub fn delete_time_entry(ctx: &AppContext, id: &str) -> Result<bool> {
    execute_logged_sync("time_entries::delete_time_entry", || {
        let snapshot = ctx.store.snapshot();
        let remaining: Vec<TimeEntry> =
            snapshot.time_entries.iter().filter(|entry| entry.id != id).cloned().collect();
        let removed = remaining.len() != snapshot.time_entries.len();
        if removed {
            ctx.store.dispatch(AppAction::SetTimeEntries(remaining));
        }
        Ok(removed)
    })
}

async fn record(ctx: &AppContext, entry: &NewTimeEntry) -> Result<TimeEntry> {
    require("task", &entry.task_id)?;
    require("project", &entry.project_id)?;
    require("user", &entry.user_id)?;
    validate_minutes(entry.duration)?;

    let created = ctx.gateway.create_time_entry(entry).await?;
    info!(entry_id = %created.id, minutes = created.duration, "Time logged");
    ctx.store.dispatch(AppAction::AddTimeEntry(created.clone()));
    Ok(created)
}

fn validate_minutes(minutes: i64) -> Result<()> {
    if minutes <= 0 {
        return Err(WorkboardError::InvalidInput("duration must be positive".to_string()));
    }
    Ok(())
}
