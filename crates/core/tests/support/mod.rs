//! Shared test helpers for `workboard-core` integration tests.
//!
//! In-memory mocks for the gateway and credential ports plus record builders.

#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;
