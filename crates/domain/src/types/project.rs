//! Project records and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::task::Priority;
use crate::impl_domain_status_conversions;
use crate::utils::dates::optional_datetime;
use crate::utils::nullable::null_as_default;

/// Lifecycle state of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    NotStarted,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl_domain_status_conversions!(ProjectStatus {
    NotStarted => "not_started",
    InProgress => "in_progress",
    OnHold => "on_hold",
    Completed => "completed",
    Cancelled => "cancelled",
});

/// Project as served by `/projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub owner_id: String,
    pub priority: Priority,
    pub status: ProjectStatus,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub deadline: Option<DateTime<Utc>>,
    /// Hours budgeted per month; 0 means unbudgeted
    #[serde(default, deserialize_with = "null_as_default")]
    pub monthly_hour_allocation: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub owner_id: String,
    pub priority: Priority,
    pub status: ProjectStatus,
    #[serde(default, with = "optional_datetime")]
    pub deadline: Option<DateTime<Utc>>,
    pub monthly_hour_allocation: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl From<&Project> for NewProject {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            client_id: project.client_id.clone(),
            owner_id: project.owner_id.clone(),
            priority: project.priority,
            status: project.status,
            deadline: project.deadline,
            monthly_hour_allocation: project.monthly_hour_allocation,
            tags: project.tags.clone(),
        }
    }
}

/// Body of `PUT /projects/:id`; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_hour_allocation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ProjectPatch {
    /// Patch that only changes the status.
    pub fn status(status: ProjectStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    /// Shallow-merge the patch onto an existing record.
    pub fn apply_to(&self, project: &Project) -> Project {
        let mut merged = project.clone();
        if let Some(name) = &self.name {
            merged.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            merged.description.clone_from(description);
        }
        if let Some(priority) = self.priority {
            merged.priority = priority;
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(hours) = self.monthly_hour_allocation {
            merged.monthly_hour_allocation = hours;
        }
        if let Some(tags) = &self.tags {
            merged.tags.clone_from(tags);
        }
        merged
    }
}
