//! Task-level derived values: due-date classification, time spent, board

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use workboard_domain::constants::AT_RISK_WINDOW_DAYS;
use workboard_domain::{Profile, Project, Task, TaskStatus};

use super::filters::TaskFilter;
use super::math::minutes_to_hours;
use crate::store::AppState;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whole days until `due`, rounded up. Negative once the due date has passed.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn days_until_due(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (due - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Due date strictly before `now` and not done.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    !task.status.is_done() && task.due_date.is_some_and(|due| due < now)
}

/// Due within the next `AT_RISK_WINDOW_DAYS` days (inclusive) and not done.
pub fn is_at_risk(task: &Task, now: DateTime<Utc>) -> bool {
    !task.status.is_done()
        && task
            .due_date
            .is_some_and(|due| (0..=AT_RISK_WINDOW_DAYS).contains(&days_until_due(due, now)))
}

/// Hours logged against `task_id` across all users.
pub fn time_spent_hours(state: &AppState, task_id: &str) -> f64 {
    let minutes: i64 = state
        .time_entries
        .iter()
        .filter(|entry| entry.task_id == task_id)
        .map(|entry| entry.duration)
        .sum();
    minutes_to_hours(minutes)
}

/// Number of tasks in each status; every status is present.
pub fn counts_by_status<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> BTreeMap<TaskStatus, usize> {
    let mut counts: BTreeMap<TaskStatus, usize> =
        TaskStatus::ALL.iter().map(|status| (*status, 0)).collect();
    for task in tasks {
        *counts.entry(task.status).or_default() += 1;
    }
    counts
}

/// One board column
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// Group `tasks` into one column per status, in board order.
pub fn board<'a>(tasks: &[&'a Task]) -> Vec<BoardColumn<'a>> {
    TaskStatus::ALL
        .iter()
        .map(|status| BoardColumn {
            status: *status,
            tasks: tasks.iter().copied().filter(|task| task.status == *status).collect(),
        })
        .collect()
}

/// Task joined with the records a list row displays
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCard<'a> {
    pub task: &'a Task,
    pub project: Option<&'a Project>,
    pub assignee: Option<&'a Profile>,
    pub hours_spent: f64,
    pub overdue: bool,
    pub at_risk: bool,
    /// (completed, total)
    pub subtasks: (usize, usize),
}

pub fn task_cards<'a>(
    state: &'a AppState,
    filter: &TaskFilter,
    now: DateTime<Utc>,
) -> Vec<TaskCard<'a>> {
    filter
        .apply(&state.tasks)
        .into_iter()
        .map(|task| TaskCard {
            task,
            project: state.project(&task.project_id),
            assignee: state.profile(&task.assignee_id),
            hours_spent: time_spent_hours(state, &task.id),
            overdue: is_overdue(task, now),
            at_risk: is_at_risk(task, now),
            subtasks: task.subtask_progress(),
        })
        .collect()
}
