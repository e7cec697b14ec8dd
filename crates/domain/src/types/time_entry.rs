//! Time entry records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::utils::dates::{calendar_date, optional_datetime};
use crate::utils::nullable::null_as_default;

/// Logged work, append-mostly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TimeEntry {
    pub id: String,
    pub task_id: String,
    pub project_id: String,
    pub user_id: String,
    #[serde(with = "calendar_date")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub date: NaiveDate,
    /// Minutes
    pub duration: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /time-entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTimeEntry {
    pub task_id: String,
    pub project_id: String,
    pub user_id: String,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub duration: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}
