//! Dashboard statistics
//!
//! Served by `GET /dashboard/stats` (camelCase on the wire) or computed from
//! the local snapshot when the backend is unavailable.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::utils::nullable::null_as_default;

/// Task counters for the signed-in user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Tasks assigned to the user
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tasks: u32,

    /// Assigned tasks in the `done` column
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_tasks: u32,

    /// Tasks completed since local midnight
    #[serde(default, deserialize_with = "null_as_default")]
    pub today_completed_tasks: u32,

    /// Tasks past their due date and not done
    #[serde(default, deserialize_with = "null_as_default")]
    pub overdue_tasks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_payload() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"totalTasks": 12, "completedTasks": 5, "todayCompletedTasks": 1, "overdueTasks": 2}"#,
        )
        .unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                total_tasks: 12,
                completed_tasks: 5,
                today_completed_tasks: 1,
                overdue_tasks: 2,
            }
        );
    }
}
