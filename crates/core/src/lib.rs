//! # Workboard Core
//!
//! Client-side business logic - no transport dependencies.
//!
//! This crate contains:
//! - The application state container (snapshot, actions, reducer, store)
//! - Derived view computations over a snapshot
//! - Session/identity state machine
//! - Bulk-load orchestration and the tracking timer
//! - Port interfaces (traits) implemented by `workboard-infra`
//!
//! ## Architecture Principles
//! - Only depends on `workboard-domain`
//! - No HTTP, filesystem, or keychain code
//! - All external dependencies via traits
//! - Derived views are pure functions of a snapshot

pub mod session;
pub mod store;
pub mod tracking;
pub mod views;
pub mod workspace;

#[cfg(test)]
mod test_support;

// Re-export specific items to avoid ambiguity
pub use session::ports::{CredentialStore, IdentityGateway, LoginBoundary};
pub use session::{SessionService, SessionState};
pub use store::{reduce, ActionEnvelope, AppAction, AppState, Store};
pub use tracking::{ActiveTimer, TrackingTimer};
pub use workspace::ports::{ProjectQuery, TaskQuery, TimeEntryQuery, WorkspaceGateway};
pub use workspace::{LoadReport, WorkspaceLoader};
