//! Time tracking session

pub mod timer;

pub use timer::{ActiveTimer, TrackingTimer};
