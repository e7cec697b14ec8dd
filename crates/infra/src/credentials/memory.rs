//! In-process credential store, lost on exit

use parking_lot::RwLock;
use workboard_core::CredentialStore;
use workboard_domain::Result;

#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.read().clone())
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_clear() {
        let store = MemoryCredentialStore::with_token("tok-1");
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-1"));
        store.store("tok-2").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-2"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
