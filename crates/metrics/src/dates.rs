use chrono::{Duration, NaiveDate};

/// Returns the inclusive `(start, end)` calendar window that ends at `today`
/// and reaches back `window_days` days.
///
/// Dates are compared as date-only values; there is no timezone arithmetic
/// anywhere in the engine.
pub fn date_range_ending(today: NaiveDate, window_days: u32) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(i64::from(window_days)), today)
}

/// Signed whole days from `a` to `b`. Negative when `b` is before `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}
