//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Backend defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_MAX_ATTEMPTS: usize = 1;

// Credential storage
pub const DEFAULT_CREDENTIAL_SLOT: &str = "auth_token";
pub const DEFAULT_CREDENTIAL_FILE: &str = "workboard-credentials.json";
pub const KEYCHAIN_SERVICE: &str = "workboard";

// Derived view thresholds
pub const AT_RISK_WINDOW_DAYS: i64 = 2;
pub const HOUR_USAGE_WARNING_PERCENT: f64 = 80.0;
pub const HOUR_USAGE_OVER_PERCENT: f64 = 100.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

// Labels
pub const UNKNOWN_PROJECT_LABEL: &str = "Unknown Project";
pub const COPY_SUFFIX: &str = " (Copy)";

// Tracking timer
pub const TIMER_TICK_MS: u64 = 1000;
pub const DEFAULT_TIMER_DESCRIPTION: &str = "Timer session";
