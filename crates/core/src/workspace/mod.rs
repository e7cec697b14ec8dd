//! Workspace data: gateway port and bulk loading

pub mod loader;
pub mod ports;

pub use loader::{LoadReport, WorkspaceLoader};
