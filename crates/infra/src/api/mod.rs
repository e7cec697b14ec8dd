//! REST gateway for the Workboard backend
//!
//! # Architecture
//!
//! - [`HttpClient`](crate::http::HttpClient) handles transport and optional retry
//! - [`ApiClient`] attaches the bearer credential, maps statuses and handles
//!   401 invalidation
//! - [`ApiCommands`] implements the core gateway ports, one method per
//!   resource/verb pair

pub mod client;
pub mod commands;
pub mod errors;

pub use client::{ApiClient, ApiClientConfig};
pub use commands::ApiCommands;
pub use errors::{ApiError, ApiErrorCategory};
