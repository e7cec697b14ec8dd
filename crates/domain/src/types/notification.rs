//! In-app notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;
use crate::utils::dates::optional_datetime;
use crate::utils::nullable::null_as_default;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl_domain_status_conversions!(NotificationKind {
    Info => "info",
    Warning => "warning",
    Error => "error",
    Success => "success",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
}
