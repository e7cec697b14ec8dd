//! Domain utilities

pub mod dates;
pub mod nullable;
