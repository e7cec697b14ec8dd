//! Session/identity holder

pub mod ports;
pub mod service;

pub use service::{SessionService, SessionState};
