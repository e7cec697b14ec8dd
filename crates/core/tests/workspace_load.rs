//! Bulk load behaviour with partially failing gateways

mod support;

use std::sync::Arc;

use support::mocks::MockWorkspace;
use workboard_core::{Store, TaskQuery, WorkspaceLoader};
use workboard_domain::TaskStatus;

#[tokio::test]
async fn healthy_load_fills_every_collection() {
    let store = Arc::new(Store::new());
    let loader = WorkspaceLoader::new(Arc::new(MockWorkspace::healthy()), Arc::clone(&store));

    let report = loader.load_all().await;

    assert!(report.is_complete());
    let state = store.snapshot();
    assert_eq!(state.profiles.len(), 2);
    assert_eq!(state.clients.len(), 1);
    assert_eq!(state.projects.len(), 1);
    assert_eq!(state.tasks.len(), 2);
    assert_eq!(state.time_entries.len(), 1);
    assert_eq!(state.dashboard_stats.map(|s| s.total_tasks), Some(4));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn failed_clients_fetch_does_not_block_other_collections() {
    let gateway = MockWorkspace { clients: None, ..MockWorkspace::healthy() };
    let store = Arc::new(Store::new());
    let loader = WorkspaceLoader::new(Arc::new(gateway), Arc::clone(&store));

    let report = loader.load_all().await;

    assert_eq!(report.failed, vec!["clients"]);
    let state = store.snapshot();
    assert!(state.clients.is_empty());
    assert_eq!(state.tasks.len(), 2);
    assert_eq!(state.projects.len(), 1);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn everything_failing_leaves_empty_workspace() {
    let store = Arc::new(Store::new());
    let loader = WorkspaceLoader::new(Arc::new(MockWorkspace::default()), Arc::clone(&store));

    let report = loader.load_all().await;

    assert_eq!(
        report.failed,
        vec!["users", "clients", "projects", "tasks", "time_entries", "dashboard_stats"]
    );
    let state = store.snapshot();
    assert!(state.tasks.is_empty());
    assert!(state.dashboard_stats.is_none());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn unauthorized_fetch_discards_the_whole_load() {
    let gateway = MockWorkspace { reject_stats: true, ..MockWorkspace::healthy() };
    let store = Arc::new(Store::new());
    let loader = WorkspaceLoader::new(Arc::new(gateway), Arc::clone(&store));

    let report = loader.load_all().await;

    assert!(report.discarded);
    assert!(!report.is_complete());
    assert_eq!(report.failed, vec!["dashboard_stats"]);
    let state = store.snapshot();
    assert!(state.tasks.is_empty());
    assert!(state.projects.is_empty());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn reset_during_load_keeps_store_empty() {
    let store = Arc::new(Store::new());
    let gateway =
        MockWorkspace { reset_during_load: Some(Arc::clone(&store)), ..MockWorkspace::healthy() };
    let loader = WorkspaceLoader::new(Arc::new(gateway), Arc::clone(&store));

    let report = loader.load_all().await;

    assert!(report.discarded);
    assert!(report.failed.is_empty());
    let state = store.snapshot();
    assert!(state.tasks.is_empty());
    assert!(state.profiles.is_empty());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn reload_tasks_passes_query_and_replaces() {
    let mut done = support::fixtures::task("t3", "p2");
    done.status = TaskStatus::Done;
    let mut gateway = MockWorkspace::healthy();
    gateway.tasks.as_mut().unwrap().push(done);
    let gateway = Arc::new(gateway);
    let store = Arc::new(Store::new());
    let loader = WorkspaceLoader::new(gateway.clone(), Arc::clone(&store));

    let query = TaskQuery { project_id: Some("p2".into()), ..TaskQuery::default() };
    let count = loader.reload_tasks(&query).await.unwrap();

    assert_eq!(count, 1);
    assert_eq!(store.snapshot().tasks[0].id, "t3");
    assert_eq!(gateway.task_queries.lock().last(), Some(&query));
}

#[tokio::test]
async fn failed_reload_keeps_current_tasks() {
    let store = Arc::new(Store::new());
    let healthy =
        WorkspaceLoader::new(Arc::new(MockWorkspace::healthy()), Arc::clone(&store));
    healthy.load_all().await;

    let broken = WorkspaceLoader::new(Arc::new(MockWorkspace::default()), Arc::clone(&store));
    assert!(broken.reload_tasks(&TaskQuery::default()).await.is_err());
    assert_eq!(store.snapshot().tasks.len(), 2);
}
