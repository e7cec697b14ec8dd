//! JSON file credential store
//!
//! The file maps slot names to tokens so several slots can share one file.
//! A missing file reads as an empty map. On Unix the file is kept owner-only
//! (0600).

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;
use workboard_core::CredentialStore;
use workboard_domain::Result;

use crate::errors::InfraError;

type Slots = BTreeMap<String, String>;

pub struct FileCredentialStore {
    path: PathBuf,
    slot: String,
    // serializes read-modify-write cycles within the process
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>, slot: impl Into<String>) -> Self {
        Self { path: path.into(), slot: slot.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<Slots> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Slots::new()),
            Err(err) => return Err(InfraError::from(err).into()),
        };
        if contents.trim().is_empty() {
            return Ok(Slots::new());
        }
        serde_json::from_str(&contents).map_err(|e| InfraError::from(e).into())
    }

    fn write_slots(&self, slots: &Slots) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(InfraError::from)?;
        }
        let contents = serde_json::to_string_pretty(slots).map_err(InfraError::from)?;
        let mut file = open_private(&self.path).map_err(InfraError::from)?;
        file.write_all(contents.as_bytes()).map_err(InfraError::from)?;
        Ok(())
    }
}

#[cfg(unix)]
const OWNER_ONLY: u32 = 0o600;

/// Truncating open that never leaves the token readable by other users
fn open_private(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        options.mode(OWNER_ONLY);
        let file = options.open(path)?;
        // mode only applies on creation; tighten files written by older versions
        file.set_permissions(std::fs::Permissions::from_mode(OWNER_ONLY))?;
        Ok(file)
    }
    #[cfg(not(unix))]
    {
        options.open(path)
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_slots()?.remove(&self.slot))
    }

    fn store(&self, token: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut slots = self.read_slots()?;
        slots.insert(self.slot.clone(), token.to_string());
        self.write_slots(&slots)?;
        debug!(slot = %self.slot, path = %self.path.display(), "Credential stored");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock();
        let mut slots = self.read_slots()?;
        if slots.remove(&self.slot).is_none() {
            return Ok(());
        }
        self.write_slots(&slots)?;
        debug!(slot = %self.slot, "Credential cleared");
        Ok(())
    }
}
