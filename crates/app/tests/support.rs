//! Shared harness: a mock backend plus an `AppContext` pointed at it.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workboard_app::AppContext;
use workboard_domain::{ApiConfig, Config, CredentialBackend, CredentialConfig};
use workboard_infra::MemoryCredentialStore;

pub const TOKEN: &str = "tok-valid";

pub struct TestApp {
    pub server: MockServer,
    pub ctx: AppContext,
    pub credentials: Arc<MemoryCredentialStore>,
}

pub fn test_config(server: &MockServer) -> Config {
    Config {
        api: ApiConfig { base_url: format!("{}/api", server.uri()), ..ApiConfig::default() },
        credentials: CredentialConfig {
            backend: CredentialBackend::Memory,
            ..CredentialConfig::default()
        },
        ..Config::default()
    }
}

/// Context with `token` already in the credential slot
pub async fn setup(token: Option<&str>) -> TestApp {
    let server = MockServer::start().await;
    let credentials = Arc::new(match token {
        Some(token) => MemoryCredentialStore::with_token(token),
        None => MemoryCredentialStore::new(),
    });
    let ctx = AppContext::new_with_credentials(test_config(&server), credentials.clone())
        .await
        .expect("context should build");
    TestApp { server, ctx, credentials }
}

/// Signed-in context with an empty workspace loaded; mocks are cleared
/// afterwards so each test mounts only what it exercises
pub async fn signed_in() -> TestApp {
    let app = setup(Some(TOKEN)).await;
    mount_json(&app.server, "GET", "/api/auth/me", profile("u1")).await;
    mount_empty_workspace(&app.server).await;
    let state = workboard_app::commands::restore_session(&app.ctx).await;
    assert!(state.is_authenticated(), "restore should authenticate");
    app.server.reset().await;
    app
}

pub async fn mount_json(server: &MockServer, verb: &str, route: &str, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_empty_workspace(server: &MockServer) {
    for route in ["/api/users", "/api/clients", "/api/projects", "/api/tasks", "/api/time-entries"] {
        mount_json(server, "GET", route, json!([])).await;
    }
    mount_json(server, "GET", "/api/dashboard/stats", stats()).await;
}

pub fn profile(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Dana Scully",
        "email": "dana@example.com",
        "role": "team_member",
        "weekly_capacity": 40,
        "is_active": true
    })
}

pub fn project(id: &str, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "owner_id": "u1",
        "client_id": "c1",
        "priority": "medium",
        "status": status,
        "monthly_hour_allocation": 40,
        "tags": ["web"]
    })
}

pub fn task(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Task {id}"),
        "description": "",
        "project_id": "p1",
        "assignee_id": "u1",
        "priority": "medium",
        "status": status,
        "estimated_hours": 2,
        "tags": [],
        "subtasks": []
    })
}

pub fn time_entry(id: &str, minutes: i64) -> Value {
    json!({
        "id": id,
        "task_id": "t1",
        "project_id": "p1",
        "user_id": "u1",
        "date": "2024-04-02",
        "duration": minutes,
        "description": "pairing"
    })
}

pub fn stats() -> Value {
    json!({
        "totalTasks": 3,
        "completedTasks": 1,
        "todayCompletedTasks": 1,
        "overdueTasks": 0
    })
}
