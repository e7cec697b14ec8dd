//! Integration tests for AppContext lifecycle
//!
//! Verifies the context wires the gateway to the credential slot and that a
//! rejected credential returns the application to the signed-out state.

mod support;

use std::time::Duration;

use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};
use workboard_app::{commands, AppContext};
use workboard_core::{CredentialStore, SessionState};
use workboard_domain::{Config, CredentialBackend, WorkboardError};

use support::{mount_empty_workspace, mount_json, profile, setup, signed_in, test_config, TOKEN};

#[tokio::test]
async fn test_context_creation_succeeds_with_memory_backend() {
    let server = wiremock::MockServer::start().await;
    let mut ctx = AppContext::new_with_config(test_config(&server)).await.expect("context should build");

    assert_eq!(ctx.session.state(), SessionState::Anonymous);
    assert!(ctx.store.snapshot().tasks.is_empty());
    assert_eq!(ctx.credentials().load().unwrap(), None);

    ctx.shutdown().await;
}

#[tokio::test]
async fn test_invalid_base_url_is_rejected() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();

    let result = AppContext::new_with_config(config).await;
    assert!(matches!(result, Err(WorkboardError::Config(_))));
}

#[tokio::test]
async fn test_restore_without_credential_stays_anonymous() {
    let app = setup(None).await;

    let state = commands::restore_session(&app.ctx).await;

    assert_eq!(state, SessionState::Anonymous);
    assert!(app.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unauthorized_response_signs_out_and_empties_store() {
    let app = signed_in().await;
    app.ctx.store.dispatch(workboard_core::AppAction::SetLoading(true));

    app.server.reset().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(401)).mount(&app.server).await;

    let mut session = app.ctx.session.subscribe();
    let err = commands::today_tasks(&app.ctx).await.unwrap_err();
    assert!(err.is_unauthorized());

    tokio::time::timeout(Duration::from_secs(2), session.wait_for(|state| !state.is_authenticated()))
        .await
        .expect("session should be invalidated")
        .expect("session channel open");

    assert_eq!(app.credentials.load().unwrap(), None);
    let mut store = app.ctx.store.subscribe();
    tokio::time::timeout(Duration::from_secs(2), store.wait_for(|state| !state.is_loading))
        .await
        .expect("store should be reset")
        .expect("store channel open");
}

#[tokio::test]
async fn test_shutdown_cancels_running_timer() {
    let mut app = signed_in().await;
    let _ticks = commands::start_timer(&app.ctx, "t1", "p1", "").unwrap();
    assert!(app.ctx.timer.is_running());

    app.ctx.shutdown().await;

    assert!(!app.ctx.timer.is_running());
}

#[tokio::test]
async fn test_file_credential_survives_a_new_context() {
    let dir = tempfile::tempdir().unwrap();
    let server = wiremock::MockServer::start().await;
    let mut config = test_config(&server);
    config.credentials.backend = CredentialBackend::File;
    config.credentials.path = dir.path().join("credentials.json");

    mount_json(&server, "POST", "/api/auth/login", serde_json::json!({"token": TOKEN, "user": profile("u1")}))
        .await;
    mount_json(&server, "GET", "/api/auth/me", profile("u1")).await;
    mount_empty_workspace(&server).await;

    let mut first = AppContext::new_with_config(config.clone()).await.unwrap();
    commands::sign_in(&first, "dana@example.com", "secret").await.unwrap();
    first.shutdown().await;
    assert!(config.credentials.path.exists());

    let mut second = AppContext::new_with_config(config).await.unwrap();
    assert_eq!(second.credentials().load().unwrap().as_deref(), Some(TOKEN));
    let state = commands::restore_session(&second).await;
    assert!(state.is_authenticated());

    second.shutdown().await;
}
