//! Session state machine
//!
//! `Anonymous -> Loading -> Authenticated | Anonymous` on restore,
//! `Anonymous -> Authenticated` on sign-in/sign-up, and back to `Anonymous` on
//! sign-out or when the backend rejects the credential.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use workboard_domain::{LoginRequest, Profile, RegisterRequest, Result, WorkboardError};

use super::ports::{CredentialStore, IdentityGateway};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Anonymous,
    /// Stored credential found; identity fetch in flight
    Loading,
    Authenticated(Profile),
}

impl SessionState {
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub const fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Holds the current session and drives its transitions
pub struct SessionService {
    identity: Arc<dyn IdentityGateway>,
    credentials: Arc<dyn CredentialStore>,
    state: watch::Sender<SessionState>,
}

impl SessionService {
    pub fn new(identity: Arc<dyn IdentityGateway>, credentials: Arc<dyn CredentialStore>) -> Self {
        let (state, _receiver) = watch::channel(SessionState::Anonymous);
        Self { identity, credentials, state }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<Profile> {
        self.state.borrow().profile().cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Resume a session from the stored credential.
    ///
    /// Failures never surface as errors: an unreadable slot or a rejected
    /// token both end in `Anonymous`.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> SessionState {
        if self.state().is_authenticated() {
            return self.state();
        }

        let token = match self.credentials.load() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "credential slot unreadable; staying anonymous");
                None
            }
        };
        if token.is_none() {
            debug!("no stored credential");
            self.transition(SessionState::Anonymous);
            return self.state();
        }

        self.transition(SessionState::Loading);
        match self.identity.current_user().await {
            Ok(profile) => {
                info!(user_id = %profile.id, "session restored");
                self.transition(SessionState::Authenticated(profile));
            }
            Err(err) => {
                warn!(error = %err, "identity fetch failed; session not restored");
                self.transition(SessionState::Anonymous);
            }
        }
        self.state()
    }

    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Profile> {
        require("email", email)?;
        require("password", password)?;

        let request = LoginRequest { email: email.trim().to_string(), password: password.to_string() };
        let response = self.identity.login(&request).await?;
        self.credentials.store(&response.token)?;

        info!(user_id = %response.user.id, "signed in");
        self.transition(SessionState::Authenticated(response.user.clone()));
        Ok(response.user)
    }

    #[instrument(skip(self, password))]
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Profile> {
        require("name", name)?;
        require("email", email)?;
        require("password", password)?;

        let request = RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = self.identity.register(&request).await?;
        self.credentials.store(&response.token)?;

        info!(user_id = %response.user.id, "account registered");
        self.transition(SessionState::Authenticated(response.user.clone()));
        Ok(response.user)
    }

    /// Clear the credential and return to `Anonymous`.
    ///
    /// The state is anonymous afterwards even if the slot could not be cleared;
    /// that failure is still reported.
    #[instrument(skip(self))]
    pub fn sign_out(&self) -> Result<()> {
        let cleared = self.credentials.clear();
        self.transition(SessionState::Anonymous);
        info!("signed out");
        cleared
    }

    /// The backend rejected the credential; the gateway already cleared it.
    pub fn invalidate(&self) {
        if self.state() != SessionState::Anonymous {
            warn!("session invalidated by backend");
        }
        self.transition(SessionState::Anonymous);
    }

    fn transition(&self, next: SessionState) {
        self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WorkboardError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}
