//! Session state machine against mock identity and credential ports

mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use support::mocks::{MemoryCredentials, MockIdentity};
use workboard_core::{CredentialStore, SessionService, SessionState};
use workboard_domain::WorkboardError;

fn service(credentials: Arc<MemoryCredentials>) -> (SessionService, Arc<MockIdentity>) {
    let identity = Arc::new(MockIdentity::new(Arc::clone(&credentials)));
    let service = SessionService::new(identity.clone(), credentials);
    (service, identity)
}

#[tokio::test]
async fn restore_without_credential_stays_anonymous() {
    let (service, identity) = service(Arc::new(MemoryCredentials::default()));

    assert_eq!(service.restore().await, SessionState::Anonymous);
    assert_eq!(identity.me_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn restore_with_valid_credential_authenticates() {
    let (service, _identity) = service(Arc::new(MemoryCredentials::holding("tok-valid")));
    let mut changes = service.subscribe();

    let state = service.restore().await;

    assert!(state.is_authenticated());
    assert_eq!(service.current_user().map(|p| p.id), Some("u1".to_string()));
    assert!(changes.has_changed().unwrap());
    assert!(changes.borrow_and_update().is_authenticated());
}

#[tokio::test]
async fn restore_with_rejected_credential_falls_back_to_anonymous() {
    let (service, identity) = service(Arc::new(MemoryCredentials::holding("tok-stale")));

    assert_eq!(service.restore().await, SessionState::Anonymous);
    assert_eq!(identity.me_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreadable_slot_is_treated_as_empty() {
    let credentials = MemoryCredentials { fail_reads: true, ..MemoryCredentials::default() };
    let (service, _identity) = service(Arc::new(credentials));

    assert_eq!(service.restore().await, SessionState::Anonymous);
}

#[tokio::test]
async fn sign_in_stores_token_and_authenticates() {
    let credentials = Arc::new(MemoryCredentials::default());
    let (service, _identity) = service(Arc::clone(&credentials));

    let profile = service.sign_in("dana@example.com", "correct horse").await.unwrap();

    assert_eq!(profile.id, "u1");
    assert_eq!(credentials.load().unwrap().as_deref(), Some("tok-valid"));
    assert_eq!(service.state(), SessionState::Authenticated(profile));
}

#[tokio::test]
async fn failed_sign_in_leaves_state_and_slot_untouched() {
    let credentials = Arc::new(MemoryCredentials::default());
    let (service, _identity) = service(Arc::clone(&credentials));

    let err = service.sign_in("dana@example.com", "wrong").await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(service.state(), SessionState::Anonymous);
    assert_eq!(credentials.load().unwrap(), None);
}

#[tokio::test]
async fn blank_fields_are_rejected_before_any_call() {
    let (service, _identity) = service(Arc::new(MemoryCredentials::default()));

    assert!(matches!(service.sign_in(" ", "pw").await, Err(WorkboardError::InvalidInput(_))));
    assert!(matches!(
        service.sign_up("", "new@example.com", "pw").await,
        Err(WorkboardError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn sign_up_then_sign_out() {
    let credentials = Arc::new(MemoryCredentials::default());
    let (service, _identity) = service(Arc::clone(&credentials));

    let profile = service.sign_up("Rin Ota", "rin@example.com", "pw").await.unwrap();
    assert_eq!(profile.name, "Rin Ota");
    assert!(service.state().is_authenticated());

    service.sign_out().unwrap();

    assert_eq!(service.state(), SessionState::Anonymous);
    assert_eq!(credentials.load().unwrap(), None);
}

#[tokio::test]
async fn invalidate_forces_anonymous() {
    let (service, _identity) = service(Arc::new(MemoryCredentials::holding("tok-valid")));
    service.restore().await;
    assert!(service.state().is_authenticated());

    service.invalidate();

    assert_eq!(service.state(), SessionState::Anonymous);
    assert!(service.current_user().is_none());
}
