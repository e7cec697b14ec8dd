//! Calendar windows used by the time-entry and sprint views
//!
//! Weeks start on Sunday.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

/// First and last day (inclusive) of the week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(day.weekday().num_days_from_sunday());
    let start = day.checked_sub_days(Days::new(offset)).unwrap_or(day);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

/// First and last day (inclusive) of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day.with_day(1).unwrap_or(day);
    let next_month = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    let end = next_month.and_then(|first| first.pred_opt()).unwrap_or(start);
    (start, end)
}

pub fn is_same_week(instant: DateTime<Utc>, today: NaiveDate) -> bool {
    let (start, end) = week_bounds(today);
    let day = instant.date_naive();
    start <= day && day <= end
}
