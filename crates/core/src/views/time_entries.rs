//! Time-entry list: range/project/search filtering, sorting, summaries

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use workboard_domain::constants::UNKNOWN_PROJECT_LABEL;
use workboard_domain::{impl_domain_status_conversions, TimeEntry};

use super::calendar::{month_bounds, week_bounds};
use super::filters::contains_ignore_case;
use super::math::minutes_to_hours;
use crate::store::AppState;

/// Date window applied to the entry list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl_domain_status_conversions!(DateRange {
    All => "all",
    Today => "today",
    Week => "week",
    Month => "month",
});

impl DateRange {
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        let (start, end) = match self {
            Self::All => return true,
            Self::Today => (today, today),
            Self::Week => week_bounds(today),
            Self::Month => month_bounds(today),
        };
        start <= date && date <= end
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntrySortKey {
    #[default]
    Date,
    Duration,
    Project,
    Created,
}

impl_domain_status_conversions!(EntrySortKey {
    Date => "date",
    Duration => "duration",
    Project => "project",
    Created => "created",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl_domain_status_conversions!(SortOrder {
    Asc => "asc",
    Desc => "desc",
});

/// Parameters of the time-entry list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryView {
    /// Restrict to one user; `None` lists everyone's entries
    pub user_id: Option<String>,
    pub range: DateRange,
    pub project_id: Option<String>,
    /// Matched against the entry description, task title and project name
    pub search: Option<String>,
    pub sort_by: EntrySortKey,
    pub order: SortOrder,
}

impl TimeEntryView {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self { user_id: Some(user_id.into()), ..Self::default() }
    }

    fn matches(&self, state: &AppState, entry: &TimeEntry, today: NaiveDate) -> bool {
        if self.user_id.as_deref().is_some_and(|id| entry.user_id != id) {
            return false;
        }
        if !self.range.contains(entry.date, today) {
            return false;
        }
        if self.project_id.as_deref().is_some_and(|id| entry.project_id != id) {
            return false;
        }
        let Some(needle) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return true;
        };
        contains_ignore_case(&entry.description, needle)
            || state.task(&entry.task_id).is_some_and(|t| contains_ignore_case(&t.title, needle))
            || state
                .project(&entry.project_id)
                .is_some_and(|p| contains_ignore_case(&p.name, needle))
    }
}

fn project_sort_name(state: &AppState, entry: &TimeEntry) -> String {
    state.project(&entry.project_id).map(|p| p.name.to_lowercase()).unwrap_or_default()
}

/// Entries matching `view`, sorted as requested.
pub fn filter_time_entries<'a>(
    state: &'a AppState,
    view: &TimeEntryView,
    today: NaiveDate,
) -> Vec<&'a TimeEntry> {
    let mut entries: Vec<&TimeEntry> =
        state.time_entries.iter().filter(|entry| view.matches(state, entry, today)).collect();

    let compare = |a: &&TimeEntry, b: &&TimeEntry| -> Ordering {
        match view.sort_by {
            EntrySortKey::Date => a.date.cmp(&b.date),
            EntrySortKey::Duration => a.duration.cmp(&b.duration),
            EntrySortKey::Project => project_sort_name(state, a).cmp(&project_sort_name(state, b)),
            EntrySortKey::Created => a.created_at.cmp(&b.created_at),
        }
    };
    match view.order {
        SortOrder::Asc => entries.sort_by(compare),
        SortOrder::Desc => entries.sort_by(|a, b| compare(b, a)),
    }
    entries
}

pub fn total_hours(entries: &[&TimeEntry]) -> f64 {
    minutes_to_hours(entries.iter().map(|entry| entry.duration).sum())
}

/// Hours per project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectHours {
    pub project: String,
    pub hours: f64,
}

/// Hours per project for `user_id` in the week containing `today`, largest
/// first.
pub fn weekly_summary(state: &AppState, user_id: &str, today: NaiveDate) -> Vec<ProjectHours> {
    let mut minutes_by_project: HashMap<&str, i64> = HashMap::new();
    for entry in state
        .time_entries
        .iter()
        .filter(|entry| entry.user_id == user_id && DateRange::Week.contains(entry.date, today))
    {
        *minutes_by_project.entry(entry.project_id.as_str()).or_default() += entry.duration;
    }

    let mut summary: Vec<ProjectHours> = minutes_by_project
        .into_iter()
        .map(|(project_id, minutes)| ProjectHours {
            project: state
                .project(project_id)
                .map_or_else(|| UNKNOWN_PROJECT_LABEL.to_string(), |p| p.name.clone()),
            hours: minutes_to_hours(minutes),
        })
        .collect();
    summary.sort_by(|a, b| b.hours.total_cmp(&a.hours).then_with(|| a.project.cmp(&b.project)));
    summary
}
