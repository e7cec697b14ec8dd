//! Display formatting helpers

/// Elapsed seconds as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Minutes as `1h 30m`, `2h` or `45m`.
pub fn format_minutes(minutes: i64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, rest) => format!("{rest}m"),
        (hours, 0) => format!("{hours}h"),
        (hours, rest) => format!("{hours}h {rest}m"),
    }
}

pub fn task_summary(completed: usize, total: usize) -> String {
    format!("{completed}/{total} tasks")
}

/// Round to one decimal place for hour displays.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
