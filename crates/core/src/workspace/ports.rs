//! Port interface for the workspace REST resources

use async_trait::async_trait;
use chrono::NaiveDate;
use workboard_domain::{
    Client, DashboardStats, NewProject, NewTask, NewTimeEntry, Priority, Profile, Project,
    ProjectPatch, ProjectStatus, Result, Task, TaskPatch, TaskStatus, TimeEntry,
};

/// Server-side filter for `list_tasks`; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<String>,
    pub project_id: Option<String>,
}

/// Server-side filter for `list_projects`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
}

/// Server-side filter for `list_time_entries`; dates are inclusive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryQuery {
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Remote CRUD over workspace resources
#[async_trait]
pub trait WorkspaceGateway: Send + Sync {
    async fn list_users(&self) -> Result<Vec<Profile>>;

    async fn list_clients(&self) -> Result<Vec<Client>>;

    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>>;

    async fn create_project(&self, project: &NewProject) -> Result<Project>;

    async fn update_project(&self, id: &str, patch: &ProjectPatch) -> Result<Project>;

    async fn delete_project(&self, id: &str) -> Result<()>;

    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>>;

    async fn create_task(&self, task: &NewTask) -> Result<Task>;

    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task>;

    async fn delete_task(&self, id: &str) -> Result<()>;

    async fn list_time_entries(&self, query: &TimeEntryQuery) -> Result<Vec<TimeEntry>>;

    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<TimeEntry>;

    /// Aggregate counters for the signed-in user
    async fn dashboard_stats(&self) -> Result<DashboardStats>;

    /// Tasks due today for the signed-in user
    async fn today_tasks(&self) -> Result<Vec<Task>>;
}
