//! Derived views
//!
//! Pure functions of an [`AppState`](crate::store::AppState) snapshot plus the
//! current instant. Nothing here performs I/O or reads the clock; callers pass
//! `now`/`today` so results are reproducible.

pub mod calendar;
pub mod dashboard;
pub mod filters;
pub mod format;
pub mod math;
pub mod projects;
pub mod tasks;
pub mod time_entries;

pub use dashboard::{local_stats, status_overview, StatusOverview};
pub use filters::{parse_choice, ProjectFilter, TaskFilter};
pub use projects::{project_cards, project_stats, HourUsage, ProjectCard, ProjectStats, UsageLevel};
pub use tasks::{
    board, days_until_due, is_at_risk, is_overdue, task_cards, time_spent_hours, BoardColumn,
    TaskCard,
};
pub use time_entries::{
    filter_time_entries, total_hours, weekly_summary, DateRange, EntrySortKey, ProjectHours,
    SortOrder, TimeEntryView,
};
