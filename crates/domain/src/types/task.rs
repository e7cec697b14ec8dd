//! Task records and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;
use crate::utils::dates::optional_datetime;
use crate::utils::nullable::null_as_default;

/// Priority shared by projects and tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl_domain_status_conversions!(Priority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

/// Board column of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Backlog,
    Todo,
    InProgress,
    Review,
    Done,
}

impl_domain_status_conversions!(TaskStatus {
    Backlog => "backlog",
    Todo => "todo",
    InProgress => "in_progress",
    Review => "review",
    Done => "done",
});

impl TaskStatus {
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Checklist item nested in a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Subtask {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

/// Task as served by `/tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub project_id: String,
    pub assignee_id: String,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_hours: f64,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtasks: Vec<Subtask>,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Completed and total subtask counts.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let completed = self.subtasks.iter().filter(|subtask| subtask.completed).count();
        (completed, self.subtasks.len())
    }
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub project_id: String,
    pub assignee_id: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub estimated_hours: f64,
    /// Sent as `null` when unset
    #[serde(default, with = "optional_datetime")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Body of `PUT /tasks/:id`; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
}

impl TaskPatch {
    /// Patch that only moves the task to another column.
    pub fn status(status: TaskStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    /// Whether the patch changes anything.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
