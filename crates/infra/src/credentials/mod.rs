//! Credential slot implementations
//!
//! The backend is picked from [`CredentialConfig`]; every store holds a
//! single named slot.

pub mod file;
pub mod keychain;
pub mod memory;

use std::sync::Arc;

use tracing::debug;
use workboard_core::CredentialStore;
use workboard_domain::{CredentialBackend, CredentialConfig};

pub use file::FileCredentialStore;
pub use keychain::KeychainCredentialStore;
pub use memory::MemoryCredentialStore;

/// Build the configured credential store
pub fn credential_store(config: &CredentialConfig) -> Arc<dyn CredentialStore> {
    debug!(backend = %config.backend, slot = %config.slot, "Using credential backend");
    match config.backend {
        CredentialBackend::File => {
            Arc::new(FileCredentialStore::new(config.path.clone(), config.slot.clone()))
        }
        CredentialBackend::Keychain => Arc::new(KeychainCredentialStore::new(config.slot.clone())),
        CredentialBackend::Memory => Arc::new(MemoryCredentialStore::new()),
    }
}
