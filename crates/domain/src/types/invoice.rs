//! Invoice records
//!
//! Totals are computed by the backend when the invoice is drafted and are not
//! recomputed when time entries change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;
use crate::utils::dates::{calendar_date, optional_datetime};
use crate::utils::nullable::null_as_default;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
}

impl_domain_status_conversions!(InvoiceStatus {
    Draft => "draft",
    Sent => "sent",
    Paid => "paid",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Invoice {
    pub id: String,
    pub client_id: String,
    #[serde(with = "calendar_date")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub period_start: NaiveDate,
    #[serde(with = "calendar_date")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub period_end: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_hours: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hourly_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tax: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: f64,
    pub status: InvoiceStatus,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_datetime")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub updated_at: Option<DateTime<Utc>>,
}
