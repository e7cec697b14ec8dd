//! User profile types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;
use crate::utils::dates::optional_datetime;
use crate::utils::nullable::null_as_default;

/// Role of a team member. Gates UI affordances only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    ProjectManager,
    TeamMember,
    Client,
}

impl_domain_status_conversions!(UserRole {
    Admin => "admin",
    ProjectManager => "project_manager",
    TeamMember => "team_member",
    Client => "client",
});

/// Team member profile as served by `/users` and `/auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Hours per week available for assigned work
    #[serde(default, deserialize_with = "null_as_default")]
    pub weekly_capacity: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Whether the profile can be assigned tasks (clients cannot).
    pub fn is_assignable(&self) -> bool {
        self.role != UserRole::Client
    }

    /// First word of the display name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

pub(crate) const fn default_true() -> bool {
    true
}
