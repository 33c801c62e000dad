//! Pure month-boundary date helpers.
//!
//! These produce the typical `[start, end]` bounds passed to
//! [`crate::core::movement::get_expenses`]. No storage access.

use chrono::NaiveDate;

/// Returns the first day of the given month, or None if the month is out of
/// range.
#[must_use]
pub fn first_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Returns the last day of the given month, or None if the month is out of
/// range. Leap years are handled by chrono.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    first_of_next.pred_opt()
}
