//! Ratio helpers shared by the views

use workboard_domain::constants::MINUTES_PER_HOUR;

/// `part / whole * 100`, or 0 when `whole` is zero.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole.abs() < f64::EPSILON {
        return 0.0;
    }
    let value = part / whole * 100.0;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Percentage of two counts rounded to the nearest whole number.
pub fn rounded_percentage(part: usize, whole: usize) -> u32 {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = percentage(part as f64, whole as f64).round() as u32;
    rounded
}

#[allow(clippy::cast_precision_loss)]
pub fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / MINUTES_PER_HOUR
}
