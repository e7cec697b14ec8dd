//! Application state container
//!
//! One owner ([`Store`]) holds the current snapshot; every write goes through
//! [`reduce`]. Readers take cheap `Arc` snapshots or subscribe to a
//! `tokio::sync::watch` channel that fires once per effective change.
//!
//! Every [`Store::reset`] starts a new epoch. Writers that fetched data before
//! a reset use [`Store::dispatch_all_since`] so stale results are dropped.

pub mod actions;
pub mod reducer;
pub mod state;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, trace};
use workboard_domain::Result;

pub use actions::{ActionEnvelope, AppAction};
pub use reducer::reduce;
pub use state::AppState;

/// Owner of the current [`AppState`] snapshot
pub struct Store {
    sender: watch::Sender<Arc<AppState>>,
    /// Bumped under the channel's write lock on every reset
    epoch: AtomicU64,
}

impl Store {
    /// Create a store holding an empty snapshot.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store seeded with `state`.
    pub fn with_state(state: AppState) -> Self {
        let (sender, _receiver) = watch::channel(Arc::new(state));
        Self { sender, epoch: AtomicU64::new(0) }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.sender.borrow())
    }

    /// Apply `action` and return the resulting snapshot.
    ///
    /// Subscribers are only woken when the reducer produced a new snapshot.
    pub fn dispatch(&self, action: AppAction) -> Arc<AppState> {
        let kind = action.kind();
        let mut produced = None;

        let changed = self.sender.send_if_modified(|current| {
            let next = reduce(current, action);
            let changed = !Arc::ptr_eq(current, &next);
            if changed {
                *current = Arc::clone(&next);
            }
            produced = Some(next);
            changed
        });

        trace!(action = kind, changed, "action dispatched");
        produced.unwrap_or_else(|| self.snapshot())
    }

    /// Decode and apply a JSON action envelope.
    ///
    /// Unknown action types leave the state untouched and return the current
    /// snapshot.
    pub fn dispatch_envelope(&self, envelope: ActionEnvelope) -> Result<Arc<AppState>> {
        let kind = envelope.kind.clone();
        match envelope.decode()? {
            Some(action) => Ok(self.dispatch(action)),
            None => {
                debug!(action = %kind, "unrecognized action ignored");
                Ok(self.snapshot())
            }
        }
    }

    /// Number of resets so far.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Apply `actions` as one update, unless the store was reset after
    /// `epoch` was read. Returns whether the actions were applied.
    pub fn dispatch_all_since(&self, epoch: u64, actions: Vec<AppAction>) -> bool {
        let mut applied = false;
        self.sender.send_if_modified(|current| {
            if self.epoch.load(Ordering::Acquire) != epoch {
                return false;
            }
            applied = true;
            commit(current, actions)
        });

        if !applied {
            debug!(epoch, "store was reset; batch dropped");
        }
        applied
    }

    /// Receiver that observes every committed snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.sender.subscribe()
    }

    /// Empty every collection, clear stats and loading.
    pub fn reset(&self) -> Arc<AppState> {
        self.sender.send_if_modified(|current| {
            self.epoch.fetch_add(1, Ordering::AcqRel);
            commit(current, AppAction::reset_sequence())
        });
        self.snapshot()
    }
}

/// Fold `actions` into `current`; true if the snapshot changed.
fn commit(current: &mut Arc<AppState>, actions: Vec<AppAction>) -> bool {
    let next = actions.into_iter().fold(Arc::clone(current), |state, action| reduce(&state, action));
    let changed = !Arc::ptr_eq(current, &next);
    if changed {
        *current = next;
    }
    changed
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("Store")
            .field("projects", &snapshot.projects.len())
            .field("tasks", &snapshot.tasks.len())
            .field("time_entries", &snapshot.time_entries.len())
            .field("is_loading", &snapshot.is_loading)
            .finish_non_exhaustive()
    }
}
