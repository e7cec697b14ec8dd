//! Billing client records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::user::default_true;
use crate::utils::dates::optional_datetime;
use crate::utils::nullable::null_as_default;

/// A billed customer. Referenced by `Project::client_id` and
/// `Invoice::client_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hourly_rate: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub updated_at: Option<DateTime<Utc>>,
}
