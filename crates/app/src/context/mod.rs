//! Application context - dependency injection container
//!
//! Wires configuration, the credential slot, the REST gateway and the core
//! services together, and reacts to login-boundary redirects raised by the
//! gateway.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use workboard_core::{
    CredentialStore, IdentityGateway, SessionService, Store, TrackingTimer, WorkspaceGateway,
    WorkspaceLoader,
};
use workboard_domain::{Config, Result, WorkboardError};
use workboard_infra::{
    config, credential_store, ApiClient, ApiClientConfig, ApiCommands, ChannelNavigator,
    LoginRedirect,
};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<Store>,
    pub session: Arc<SessionService>,
    pub gateway: Arc<dyn WorkspaceGateway>,
    pub loader: WorkspaceLoader,
    pub timer: Arc<TrackingTimer>,
    credentials: Arc<dyn CredentialStore>,
    shutdown: CancellationToken,
    redirect_watcher: Option<JoinHandle<()>>,
}

impl AppContext {
    /// Create a context from the discovered configuration
    ///
    /// # Errors
    /// Returns an error if configuration is invalid or the HTTP client
    /// cannot be built.
    pub async fn new() -> Result<Self> {
        let config = config::load()?;
        Self::new_with_config(config).await
    }

    /// Create a context with a specific configuration
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn new_with_config(config: Config) -> Result<Self> {
        let credentials = credential_store(&config.credentials);
        Self::new_with_credentials(config, credentials).await
    }

    /// Create a context around an existing credential store
    pub async fn new_with_credentials(
        config: Config,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self> {
        let (navigator, redirects) = ChannelNavigator::new();
        let client = ApiClient::new(
            ApiClientConfig::from(&config.api),
            Arc::clone(&credentials),
            Arc::new(navigator),
        )
        .map_err(WorkboardError::from)?;
        let api = Arc::new(ApiCommands::new(Arc::new(client)));

        let identity: Arc<dyn IdentityGateway> = api.clone();
        let gateway: Arc<dyn WorkspaceGateway> = api;
        let store = Arc::new(Store::new());
        let session = Arc::new(SessionService::new(identity, Arc::clone(&credentials)));
        let loader = WorkspaceLoader::new(Arc::clone(&gateway), Arc::clone(&store));
        let timer = Arc::new(TrackingTimer::new());

        let shutdown = CancellationToken::new();
        let redirect_watcher = tokio::spawn(watch_redirects(
            redirects,
            Arc::clone(&session),
            Arc::clone(&store),
            Arc::clone(&timer),
            shutdown.clone(),
        ));

        info!(base_url = %config.api.base_url, backend = %config.credentials.backend, "Application context ready");

        Ok(Self {
            config,
            store,
            session,
            gateway,
            loader,
            timer,
            credentials,
            shutdown,
            redirect_watcher: Some(redirect_watcher),
        })
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Id of the signed-in user
    ///
    /// # Errors
    /// Returns `WorkboardError::Auth` when nobody is signed in.
    pub fn require_user_id(&self) -> Result<String> {
        self.session
            .current_user()
            .map(|profile| profile.id)
            .ok_or_else(|| WorkboardError::Auth("sign in required".to_string()))
    }

    /// Stop background work and wait for it to finish
    pub async fn shutdown(&mut self) {
        self.timer.cancel();
        self.shutdown.cancel();
        if let Some(handle) = self.redirect_watcher.take() {
            if let Err(err) = handle.await {
                debug!(error = %err, "redirect watcher ended abnormally");
            }
        }
        info!("Application context shut down");
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.timer.cancel();
        self.shutdown.cancel();
    }
}

/// Return to the signed-out state whenever the gateway reports a rejected
/// credential.
async fn watch_redirects(
    mut redirects: UnboundedReceiver<LoginRedirect>,
    session: Arc<SessionService>,
    store: Arc<Store>,
    timer: Arc<TrackingTimer>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            () = shutdown.cancelled() => break,
            redirect = redirects.recv() => {
                let Some(redirect) = redirect else { break };
                info!(requested_at = %redirect.requested_at, "Returning to login");
                timer.cancel();
                session.invalidate();
                store.reset();
            }
        }
    }
    debug!("redirect watcher stopped");
}
