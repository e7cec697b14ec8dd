//! REST commands for the workspace and identity endpoints
//!
//! `ApiCommands` implements the core gateway ports on top of [`ApiClient`].
//! Transport failures are logged with their category and converted into
//! [`WorkboardError`] at the port boundary.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use url::form_urlencoded;
use urlencoding::encode;
use workboard_core::{IdentityGateway, ProjectQuery, TaskQuery, TimeEntryQuery, WorkspaceGateway};
use workboard_domain::{
    AuthResponse, Client, DashboardStats, LoginRequest, NewProject, NewTask, NewTimeEntry,
    Profile, Project, ProjectPatch, RegisterRequest, Result, Task, TaskPatch, TimeEntry,
    WorkboardError,
};

use super::client::ApiClient;
use super::errors::ApiError;

/// Gateway over the Workboard REST API
pub struct ApiCommands {
    client: Arc<ApiClient>,
}

impl ApiCommands {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

/// Builds `path?k=v&...` from the parameters that are set
fn with_query<I>(path: &str, params: I) -> String
where
    I: IntoIterator<Item = (&'static str, Option<String>)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, &value);
            any = true;
        }
    }
    if any {
        format!("{path}?{}", serializer.finish())
    } else {
        path.to_string()
    }
}

fn resource(collection: &str, id: &str) -> String {
    format!("{collection}/{}", encode(id))
}

fn into_domain(operation: &'static str) -> impl FnOnce(ApiError) -> WorkboardError {
    move |err| {
        warn!(operation, category = ?err.category(), error = %err, "API call failed");
        WorkboardError::from(err)
    }
}

#[async_trait]
impl IdentityGateway for ApiCommands {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let response: AuthResponse =
            self.client.post("/auth/login", request).await.map_err(into_domain("login"))?;
        debug!(user_id = %response.user.id, "Signed in");
        Ok(response)
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let response: AuthResponse =
            self.client.post("/auth/register", request).await.map_err(into_domain("register"))?;
        debug!(user_id = %response.user.id, "Registered");
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn current_user(&self) -> Result<Profile> {
        self.client.get("/auth/me").await.map_err(into_domain("current_user"))
    }
}

#[async_trait]
impl WorkspaceGateway for ApiCommands {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<Profile>> {
        self.client.get("/users").await.map_err(into_domain("list_users"))
    }

    #[instrument(skip(self))]
    async fn list_clients(&self) -> Result<Vec<Client>> {
        self.client.get("/clients").await.map_err(into_domain("list_clients"))
    }

    #[instrument(skip(self))]
    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>> {
        let path = with_query(
            "/projects",
            [
                ("status", query.status.map(|s| s.to_string())),
                ("priority", query.priority.map(|p| p.to_string())),
            ],
        );
        self.client.get(&path).await.map_err(into_domain("list_projects"))
    }

    #[instrument(skip(self, project), fields(name = %project.name))]
    async fn create_project(&self, project: &NewProject) -> Result<Project> {
        let created: Project =
            self.client.post("/projects", project).await.map_err(into_domain("create_project"))?;
        debug!(project_id = %created.id, "Project created");
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(project_id = %id))]
    async fn update_project(&self, id: &str, patch: &ProjectPatch) -> Result<Project> {
        self.client
            .put(&resource("/projects", id), patch)
            .await
            .map_err(into_domain("update_project"))
    }

    #[instrument(skip(self), fields(project_id = %id))]
    async fn delete_project(&self, id: &str) -> Result<()> {
        self.client.delete(&resource("/projects", id)).await.map_err(into_domain("delete_project"))
    }

    #[instrument(skip(self))]
    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        let path = with_query(
            "/tasks",
            [
                ("status", query.status.map(|s| s.to_string())),
                ("priority", query.priority.map(|p| p.to_string())),
                ("assignee", query.assignee_id.clone()),
                ("project", query.project_id.clone()),
            ],
        );
        self.client.get(&path).await.map_err(into_domain("list_tasks"))
    }

    #[instrument(skip(self, task), fields(project_id = %task.project_id))]
    async fn create_task(&self, task: &NewTask) -> Result<Task> {
        let created: Task =
            self.client.post("/tasks", task).await.map_err(into_domain("create_task"))?;
        debug!(task_id = %created.id, "Task created");
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(task_id = %id))]
    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        self.client.put(&resource("/tasks", id), patch).await.map_err(into_domain("update_task"))
    }

    #[instrument(skip(self), fields(task_id = %id))]
    async fn delete_task(&self, id: &str) -> Result<()> {
        self.client.delete(&resource("/tasks", id)).await.map_err(into_domain("delete_task"))
    }

    #[instrument(skip(self))]
    async fn list_time_entries(&self, query: &TimeEntryQuery) -> Result<Vec<TimeEntry>> {
        let path = with_query(
            "/time-entries",
            [
                ("user_id", query.user_id.clone()),
                ("project_id", query.project_id.clone()),
                ("from", query.from.map(|d| d.to_string())),
                ("to", query.to.map(|d| d.to_string())),
            ],
        );
        self.client.get(&path).await.map_err(into_domain("list_time_entries"))
    }

    #[instrument(skip(self, entry), fields(task_id = %entry.task_id, minutes = entry.duration))]
    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<TimeEntry> {
        self.client.post("/time-entries", entry).await.map_err(into_domain("create_time_entry"))
    }

    #[instrument(skip(self))]
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.client.get("/dashboard/stats").await.map_err(into_domain("dashboard_stats"))
    }

    #[instrument(skip(self))]
    async fn today_tasks(&self) -> Result<Vec<Task>> {
        self.client.get("/dashboard/today-tasks").await.map_err(into_domain("today_tasks"))
    }
}
