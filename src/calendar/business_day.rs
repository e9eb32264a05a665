//! Business-day determination.

use chrono::{Datelike, NaiveDate};

use crate::models::{DaySchedule, WeekConfiguration};

use super::is_alternate_week;

/// Returns the schedule governing a date, if the date is a business day.
///
/// A date is a business day when its weekday is configured, marked open,
/// and (for `alternate_weeks_only` days) falls on an alternate week.
pub fn business_schedule(config: &WeekConfiguration, date: NaiveDate) -> Option<&DaySchedule> {
    let schedule = config.get(date.weekday())?;

    if !schedule.is_open {
        return None;
    }

    if schedule.alternate_weeks_only && !is_alternate_week(date) {
        return None;
    }

    Some(schedule)
}

/// Determines whether a date is a business day.
///
/// Missing weekdays and closed weekdays are not business days. The time of
/// day plays no part.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use store_hours::calendar::is_business_day;
/// use store_hours::models::{DaySchedule, WeekConfiguration};
///
/// let week = WeekConfiguration::from_schedules(vec![DaySchedule::open(
///     Weekday::Wed,
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
/// )])
/// .unwrap();
///
/// assert!(is_business_day(&week, NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()));
/// assert!(!is_business_day(&week, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()));
/// ```
pub fn is_business_day(config: &WeekConfiguration, date: NaiveDate) -> bool {
    business_schedule(config, date).is_some()
}
