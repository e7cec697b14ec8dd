//! OS keychain credential store
//!
//! Entries live under the `workboard` service with the slot as account name.

use keyring::Entry;
use tracing::debug;
use workboard_core::CredentialStore;
use workboard_domain::constants::KEYCHAIN_SERVICE;
use workboard_domain::Result;

use crate::errors::InfraError;

pub struct KeychainCredentialStore {
    service: String,
    slot: String,
}

impl KeychainCredentialStore {
    pub fn new(slot: impl Into<String>) -> Self {
        Self::with_service(KEYCHAIN_SERVICE, slot)
    }

    pub fn with_service(service: impl Into<String>, slot: impl Into<String>) -> Self {
        Self { service: service.into(), slot: slot.into() }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service, &self.slot).map_err(|e| InfraError::from(e).into())
    }
}

impl CredentialStore for KeychainCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    fn store(&self, token: &str) -> Result<()> {
        self.entry()?.set_password(token).map_err(InfraError::from)?;
        debug!(service = %self.service, slot = %self.slot, "Credential stored in keychain");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}
