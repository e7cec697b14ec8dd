//! Dashboard overview numbers

use chrono::{DateTime, Utc};
use workboard_domain::DashboardStats;

use super::calendar::is_same_week;
use super::math::rounded_percentage;
use super::tasks::{is_at_risk, is_overdue};
use crate::store::AppState;

/// Stats for `user_id` computed from the snapshot, used when the backend
/// endpoint is unavailable.
pub fn local_stats(state: &AppState, user_id: &str, now: DateTime<Utc>) -> DashboardStats {
    let today = now.date_naive();
    let mut stats = DashboardStats::default();

    for task in state.tasks.iter().filter(|task| task.assignee_id == user_id) {
        stats.total_tasks += 1;
        if task.status.is_done() {
            stats.completed_tasks += 1;
            if task.updated_at.is_some_and(|updated| updated.date_naive() == today) {
                stats.today_completed_tasks += 1;
            }
        }
        if is_overdue(task, now) {
            stats.overdue_tasks += 1;
        }
    }
    stats
}

/// Headline figures of the overview page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusOverview {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub overdue_tasks: u32,
    /// Open tasks due within the at-risk window, across the workspace
    pub at_risk_tasks: u32,
    /// Rounded percent of `completed_tasks / total_tasks`
    pub completion_rate: u32,
    /// Rounded percent of this week's new tasks that are done
    pub sprint_completion: u32,
}

impl StatusOverview {
    /// At-risk and overdue tasks together.
    pub const fn needs_attention(&self) -> u32 {
        self.at_risk_tasks + self.overdue_tasks
    }
}

pub fn status_overview(
    state: &AppState,
    stats: &DashboardStats,
    now: DateTime<Utc>,
) -> StatusOverview {
    let today = now.date_naive();
    let at_risk = state.tasks.iter().filter(|task| is_at_risk(task, now)).count();

    let (sprint_done, sprint_total) = state
        .tasks
        .iter()
        .filter(|task| task.created_at.is_some_and(|created| is_same_week(created, today)))
        .fold((0, 0), |(done, total), task| (done + usize::from(task.status.is_done()), total + 1));

    StatusOverview {
        total_tasks: stats.total_tasks,
        completed_tasks: stats.completed_tasks,
        overdue_tasks: stats.overdue_tasks,
        at_risk_tasks: u32::try_from(at_risk).unwrap_or(u32::MAX),
        completion_rate: rounded_percentage(
            stats.completed_tasks as usize,
            stats.total_tasks as usize,
        ),
        sprint_completion: rounded_percentage(sprint_done, sprint_total),
    }
}
