//! # Workboard Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP transport and the REST gateway (`/auth`, `/tasks`, `/projects`, ...)
//! - Credential stores (JSON file, OS keychain, memory)
//! - Login-boundary navigation over a channel
//! - Configuration loading and tracing initialisation
//!
//! ## Architecture
//! - Implements traits defined in `workboard-core`
//! - Contains all "impure" code (network, filesystem, keychain)

pub mod api;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod http;
pub mod navigation;
pub mod observability;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiCommands, ApiError, ApiErrorCategory};
pub use credentials::{
    credential_store, FileCredentialStore, KeychainCredentialStore, MemoryCredentialStore,
};
pub use errors::InfraError;
pub use http::HttpClient;
pub use navigation::{ChannelNavigator, LoginRedirect};
pub use observability::init_tracing;
