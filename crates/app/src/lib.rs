//! # Workboard App
//!
//! Application layer - orchestration commands and the composition root.
//!
//! This crate contains:
//! - Commands that call the REST gateway and dispatch into the store
//! - Application context (dependency injection)
//! - The headless `workboard` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the ports in `core` to their `infra` implementations

pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
