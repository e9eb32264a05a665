//! Alternate-week rule.
//!
//! Days flagged `alternate_weeks_only` count as business days only on
//! weeks whose ISO week-of-year number is even.

use chrono::{Datelike, NaiveDate};

/// Returns the ISO week-of-year number (1 to 53) of a date.
pub fn week_of_year(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Determines whether a date falls on an included ("alternate") week.
///
/// A week is included when its ISO week number is even. The rule is total
/// and pure; it is only consulted for days flagged `alternate_weeks_only`.
///
/// ISO years with 53 weeks end on an odd week that is followed by week 1,
/// so across such a year boundary two consecutive weeks are both excluded.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use store_hours::calendar::is_alternate_week;
///
/// // 2024-03-16 is in ISO week 11, 2024-03-23 in week 12
/// assert!(!is_alternate_week(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()));
/// assert!(is_alternate_week(NaiveDate::from_ymd_opt(2024, 3, 23).unwrap()));
/// ```
pub fn is_alternate_week(date: NaiveDate) -> bool {
    week_of_year(date) % 2 == 0
}
