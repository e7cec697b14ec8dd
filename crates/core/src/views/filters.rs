//! List filters for tasks and projects
//!
//! A `None` criterion means "all". Text search is case-insensitive substring
//! matching.

use std::str::FromStr;

use workboard_domain::{Priority, Project, ProjectStatus, Result, Task, TaskStatus, WorkboardError};

/// Parse a filter choice where `""` and `"all"` mean no constraint.
pub fn parse_choice<T>(raw: &str) -> Result<Option<T>>
where
    T: FromStr<Err = WorkboardError>,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn normalized(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|s| !s.is_empty())
}

/// Criteria for the task list and board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub project_id: Option<String>,
    pub assignee_id: Option<String>,
}

impl TaskFilter {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub const fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    /// Whether `task` satisfies every set criterion.
    pub fn matches(&self, task: &Task) -> bool {
        let search_ok = normalized(self.search.as_deref()).map_or(true, |needle| {
            contains_ignore_case(&task.title, needle) || contains_ignore_case(&task.description, needle)
        });

        search_ok
            && self.status.map_or(true, |status| task.status == status)
            && self.priority.map_or(true, |priority| task.priority == priority)
            && self.project_id.as_deref().map_or(true, |id| task.project_id == id)
            && self.assignee_id.as_deref().map_or(true, |id| task.assignee_id == id)
    }

    /// Matching tasks in their original order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}

/// Criteria for the project list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
}

impl ProjectFilter {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub const fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        let search_ok = normalized(self.search.as_deref()).map_or(true, |needle| {
            contains_ignore_case(&project.name, needle)
                || contains_ignore_case(&project.description, needle)
        });

        search_ok
            && self.status.map_or(true, |status| project.status == status)
            && self.priority.map_or(true, |priority| project.priority == priority)
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|project| self.matches(project)).collect()
    }
}
