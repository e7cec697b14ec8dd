//! Project statistics and hour-allocation usage

use workboard_domain::constants::{HOUR_USAGE_OVER_PERCENT, HOUR_USAGE_WARNING_PERCENT};
use workboard_domain::{Client, Profile, Project};

use super::filters::ProjectFilter;
use super::format::task_summary;
use super::math::{minutes_to_hours, percentage, rounded_percentage};
use crate::store::AppState;

/// Task completion and logged time for one project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub total_minutes: i64,
}

impl ProjectStats {
    pub fn total_hours(&self) -> f64 {
        minutes_to_hours(self.total_minutes)
    }

    /// Completed share of tasks, rounded; 0 for a project without tasks.
    pub fn progress(&self) -> u32 {
        rounded_percentage(self.completed_tasks, self.total_tasks)
    }

    /// `"completed/total tasks"`
    pub fn summary(&self) -> String {
        task_summary(self.completed_tasks, self.total_tasks)
    }
}

pub fn project_stats(state: &AppState, project_id: &str) -> ProjectStats {
    let (completed_tasks, total_tasks) =
        state.project_tasks(project_id).fold((0, 0), |(done, total), task| {
            (done + usize::from(task.status.is_done()), total + 1)
        });
    let total_minutes = state.project_entries(project_id).map(|entry| entry.duration).sum();

    ProjectStats { completed_tasks, total_tasks, total_minutes }
}

/// Severity of hour consumption against the monthly allocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UsageLevel {
    #[default]
    Normal,
    Warning,
    Over,
}

/// Hours used against an allocation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HourUsage {
    /// Raw percentage; exceeds 100 when over budget
    pub percentage: f64,
    /// Progress-bar fill, clamped to 100
    pub bar_width: f64,
    pub level: UsageLevel,
}

impl HourUsage {
    pub fn compute(hours_used: f64, allocation: f64) -> Self {
        let percentage = percentage(hours_used, allocation);
        let level = if percentage > HOUR_USAGE_OVER_PERCENT {
            UsageLevel::Over
        } else if percentage > HOUR_USAGE_WARNING_PERCENT {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        };
        Self { percentage, bar_width: percentage.min(100.0), level }
    }
}

/// Project joined with everything a project card renders
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard<'a> {
    pub project: &'a Project,
    pub client: Option<&'a Client>,
    pub owner: Option<&'a Profile>,
    pub stats: ProjectStats,
    pub usage: HourUsage,
}

pub fn project_cards<'a>(state: &'a AppState, filter: &ProjectFilter) -> Vec<ProjectCard<'a>> {
    filter
        .apply(&state.projects)
        .into_iter()
        .map(|project| {
            let stats = project_stats(state, &project.id);
            ProjectCard {
                project,
                client: project.client_id.as_deref().and_then(|id| state.client(id)),
                owner: state.profile(&project.owner_id),
                stats,
                usage: HourUsage::compute(stats.total_hours(), project.monthly_hour_allocation),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use workboard_domain::TaskStatus;

    use super::*;
    use crate::test_support::{client, day, entry, project, task};

    #[test]
    fn over_allocation_clamps_bar() {
        let usage = HourUsage::compute(50.0, 40.0);
        assert!((usage.percentage - 125.0).abs() < f64::EPSILON);
        assert!((usage.bar_width - 100.0).abs() < f64::EPSILON);
        assert_eq!(usage.level, UsageLevel::Over);
    }

    #[test]
    fn usage_levels_use_strict_thresholds() {
        assert_eq!(HourUsage::compute(32.0, 40.0).level, UsageLevel::Normal);
        assert_eq!(HourUsage::compute(33.0, 40.0).level, UsageLevel::Warning);
        assert_eq!(HourUsage::compute(40.0, 40.0).level, UsageLevel::Warning);
        assert_eq!(HourUsage::compute(10.0, 0.0), HourUsage::default());
    }

    #[test]
    fn project_without_tasks_reports_zero() {
        let stats = project_stats(&AppState::default(), "p1");
        assert_eq!(stats.progress(), 0);
        assert_eq!(stats.summary(), "0/0 tasks");
    }

    #[test]
    fn stats_count_done_tasks_and_minutes() {
        let state = AppState {
            tasks: vec![
                task("t1", "p1", TaskStatus::Done),
                task("t2", "p1", TaskStatus::InProgress),
                task("t3", "p2", TaskStatus::Done),
            ],
            time_entries: vec![
                entry("e1", "t1", "p1", day(2024, 1, 2), 1800),
                entry("e2", "t2", "p1", day(2024, 1, 3), 1200),
                entry("e3", "t3", "p2", day(2024, 1, 3), 60),
            ],
            ..AppState::default()
        };

        let stats = project_stats(&state, "p1");
        assert_eq!(stats, ProjectStats { completed_tasks: 1, total_tasks: 2, total_minutes: 3000 });
        assert_eq!(stats.progress(), 50);
        assert!((stats.total_hours() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cards_resolve_client_and_usage() {
        let mut alpha = project("p1", "Alpha");
        alpha.client_id = Some("c1".into());
        let state = AppState {
            clients: vec![client("c1", "Acme")],
            projects: vec![alpha],
            time_entries: vec![entry("e1", "t1", "p1", day(2024, 1, 2), 3000)],
            ..AppState::default()
        };

        let cards = project_cards(&state, &ProjectFilter::default());

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].client.map(|c| c.name.as_str()), Some("Acme"));
        assert_eq!(cards[0].usage.level, UsageLevel::Over);
    }
}
