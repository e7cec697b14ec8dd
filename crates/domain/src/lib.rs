//! # Workboard Domain
//!
//! Business domain types and models for Workboard.
//!
//! This crate contains:
//! - Entity records served by the backend (profiles, clients, projects,
//!   tasks, time entries, invoices, notifications)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Workboard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
