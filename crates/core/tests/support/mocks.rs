//! Mock port implementations

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use workboard_core::{
    CredentialStore, IdentityGateway, ProjectQuery, Store, TaskQuery, TimeEntryQuery,
    WorkspaceGateway,
};
use workboard_domain::{
    AuthResponse, Client, DashboardStats, LoginRequest, NewProject, NewTask, NewTimeEntry, Profile,
    Project, ProjectPatch, RegisterRequest, Result, Task, TaskPatch, TimeEntry, WorkboardError,
};

use super::fixtures;

fn unavailable(resource: &str) -> WorkboardError {
    WorkboardError::Http { status: 503, status_text: format!("{resource} unavailable") }
}

/// Canned responses per collection; `None` makes the fetch fail
#[derive(Default)]
pub struct MockWorkspace {
    pub users: Option<Vec<Profile>>,
    pub clients: Option<Vec<Client>>,
    pub projects: Option<Vec<Project>>,
    pub tasks: Option<Vec<Task>>,
    pub entries: Option<Vec<TimeEntry>>,
    pub stats: Option<DashboardStats>,
    pub task_queries: Mutex<Vec<TaskQuery>>,
    /// Answer the stats fetch with 401
    pub reject_stats: bool,
    /// Store reset while the users fetch is in flight, as a sign-out would
    pub reset_during_load: Option<Arc<Store>>,
}

impl MockWorkspace {
    /// Every fetch succeeds with a small dataset.
    pub fn healthy() -> Self {
        Self {
            users: Some(vec![fixtures::profile("u1"), fixtures::profile("u2")]),
            clients: Some(vec![fixtures::client("c1")]),
            projects: Some(vec![fixtures::project("p1")]),
            tasks: Some(vec![fixtures::task("t1", "p1"), fixtures::task("t2", "p1")]),
            entries: Some(vec![fixtures::entry("e1", "t1", "p1", 90)]),
            stats: Some(fixtures::stats()),
            task_queries: Mutex::new(Vec::new()),
            reject_stats: false,
            reset_during_load: None,
        }
    }
}

#[async_trait]
impl WorkspaceGateway for MockWorkspace {
    async fn list_users(&self) -> Result<Vec<Profile>> {
        if let Some(store) = &self.reset_during_load {
            store.reset();
        }
        self.users.clone().ok_or_else(|| unavailable("users"))
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        self.clients.clone().ok_or_else(|| unavailable("clients"))
    }

    async fn list_projects(&self, _query: &ProjectQuery) -> Result<Vec<Project>> {
        self.projects.clone().ok_or_else(|| unavailable("projects"))
    }

    async fn create_project(&self, _project: &NewProject) -> Result<Project> {
        Err(unavailable("projects"))
    }

    async fn update_project(&self, _id: &str, _patch: &ProjectPatch) -> Result<Project> {
        Err(unavailable("projects"))
    }

    async fn delete_project(&self, _id: &str) -> Result<()> {
        Err(unavailable("projects"))
    }

    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        self.task_queries.lock().push(query.clone());
        let tasks = self.tasks.clone().ok_or_else(|| unavailable("tasks"))?;
        Ok(tasks
            .into_iter()
            .filter(|task| query.project_id.as_deref().map_or(true, |id| task.project_id == id))
            .filter(|task| query.status.map_or(true, |status| task.status == status))
            .collect())
    }

    async fn create_task(&self, _task: &NewTask) -> Result<Task> {
        Err(unavailable("tasks"))
    }

    async fn update_task(&self, _id: &str, _patch: &TaskPatch) -> Result<Task> {
        Err(unavailable("tasks"))
    }

    async fn delete_task(&self, _id: &str) -> Result<()> {
        Err(unavailable("tasks"))
    }

    async fn list_time_entries(&self, _query: &TimeEntryQuery) -> Result<Vec<TimeEntry>> {
        self.entries.clone().ok_or_else(|| unavailable("time entries"))
    }

    async fn create_time_entry(&self, _entry: &NewTimeEntry) -> Result<TimeEntry> {
        Err(unavailable("time entries"))
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        if self.reject_stats {
            return Err(WorkboardError::Unauthorized("Unauthorized".to_string()));
        }
        self.stats.ok_or_else(|| unavailable("dashboard stats"))
    }

    async fn today_tasks(&self) -> Result<Vec<Task>> {
        Ok(Vec::new())
    }
}

/// Identity backend accepting one email/password pair
pub struct MockIdentity {
    pub email: String,
    pub password: String,
    pub profile: Profile,
    /// Token `current_user` accepts; anything else is a 401
    pub valid_token: Mutex<Option<String>>,
    pub credentials: std::sync::Arc<MemoryCredentials>,
    pub me_calls: AtomicUsize,
}

impl MockIdentity {
    pub fn new(credentials: std::sync::Arc<MemoryCredentials>) -> Self {
        Self {
            email: "dana@example.com".into(),
            password: "correct horse".into(),
            profile: fixtures::profile("u1"),
            valid_token: Mutex::new(Some("tok-valid".into())),
            credentials,
            me_calls: AtomicUsize::new(0),
        }
    }

    fn issue(&self) -> AuthResponse {
        AuthResponse { token: "tok-valid".into(), user: self.profile.clone() }
    }
}

#[async_trait]
impl IdentityGateway for MockIdentity {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        if request.email == self.email && request.password == self.password {
            Ok(self.issue())
        } else {
            Err(WorkboardError::Http { status: 400, status_text: "Bad Request".into() })
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let mut response = self.issue();
        response.user.name.clone_from(&request.name);
        response.user.email.clone_from(&request.email);
        Ok(response)
    }

    async fn current_user(&self) -> Result<Profile> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        let stored = self.credentials.load()?;
        if stored.is_some() && stored == *self.valid_token.lock() {
            Ok(self.profile.clone())
        } else {
            Err(WorkboardError::Unauthorized("token rejected".into()))
        }
    }
}

/// Credential slot held in memory
#[derive(Default)]
pub struct MemoryCredentials {
    pub token: Mutex<Option<String>>,
    pub fail_reads: bool,
}

impl MemoryCredentials {
    pub fn holding(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_string())), fail_reads: false }
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(WorkboardError::Storage("slot unreadable".into()));
        }
        Ok(self.token.lock().clone())
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}
