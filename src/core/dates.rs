//! Date helpers shared by every listing and rule.
//!
//! All comparisons are on calendar dates; time of day never matters. Functions
//! that depend on "today" take it as a parameter so callers decide the clock.

use chrono::{Days, Local, NaiveDate};

/// Display format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `today` shifted by `offset_days` (negative offsets go back in time).
/// Saturates at the calendar limits.
#[must_use]
pub fn offset_from(today: NaiveDate, offset_days: i64) -> NaiveDate {
    let shifted = if offset_days >= 0 {
        today.checked_add_days(Days::new(offset_days.unsigned_abs()))
    } else {
        today.checked_sub_days(Days::new(offset_days.unsigned_abs()))
    };
    shifted.unwrap_or(today)
}

/// Today's local date shifted by `offset_days`.
#[must_use]
pub fn today_with_offset(offset_days: i64) -> NaiveDate {
    offset_from(today(), offset_days)
}

/// True iff `date` is strictly before `today`.
#[must_use]
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Whether two closed date ranges share at least one day. A missing end date
/// makes the range a single day.
#[must_use]
pub fn overlaps(
    a_from: NaiveDate,
    a_to: Option<NaiveDate>,
    b_from: NaiveDate,
    b_to: Option<NaiveDate>,
) -> bool {
    let a_to = a_to.unwrap_or(a_from);
    let b_to = b_to.unwrap_or(b_from);
    a_from <= b_to && b_from <= a_to
}

/// Formats an optional date for display; absent dates render empty.
#[must_use]
pub fn fmt_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(String::new, |d| d.format(DATE_FORMAT).to_string())
}
