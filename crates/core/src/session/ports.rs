//! Port interfaces for identity and credential handling
//!
//! Implemented in `workboard-infra` by the REST client and the credential
//! stores.

use async_trait::async_trait;
use workboard_domain::{AuthResponse, LoginRequest, Profile, RegisterRequest, Result};

/// Remote authentication endpoints
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Exchange credentials for a token and profile
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

    /// Create an account and sign in
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;

    /// Profile of the user owning the stored credential
    async fn current_user(&self) -> Result<Profile>;
}

/// Persistence for the bearer credential (a single named slot)
pub trait CredentialStore: Send + Sync {
    /// Read the stored token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored token
    fn store(&self, token: &str) -> Result<()>;

    /// Remove the stored token; succeeds when nothing was stored
    fn clear(&self) -> Result<()>;
}

/// Where the application goes when the session is invalidated
pub trait LoginBoundary: Send + Sync {
    fn redirect_to_login(&self);
}
