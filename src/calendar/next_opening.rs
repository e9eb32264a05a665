//! Next-opening search.

use chrono::{Days, Duration, NaiveDateTime};

use crate::models::WeekConfiguration;

use super::business_schedule;

/// Number of days after the query date that the search inspects.
pub const SEARCH_HORIZON_DAYS: u64 = 7;

/// Finds the next instant at which the store opens.
///
/// Same-day fast paths, for a business day:
/// - inside the lunch window: the end of lunch, provided the store reopens
///   before closing. At exactly the end of lunch (still lunch break, as
///   boundaries are inclusive) the answer is one second later, so the result
///   is always strictly after `instant`.
/// - strictly before opening time: today's opening time.
///
/// Otherwise the following [`SEARCH_HORIZON_DAYS`] dates are scanned in order
/// and the opening time of the first business day wins. `None` means no day
/// in the horizon is a business day.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use store_hours::calendar::next_opening_instant;
/// use store_hours::models::{DaySchedule, WeekConfiguration};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let week = WeekConfiguration::from_schedules(vec![
///     DaySchedule::open(Weekday::Fri, t(8, 0), t(16, 0)),
/// ])
/// .unwrap();
///
/// // Thursday 2024-03-14 -> Friday 2024-03-15 08:00
/// let thursday = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap().and_time(t(10, 0));
/// let friday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_time(t(8, 0));
/// assert_eq!(next_opening_instant(&week, thursday), Some(friday));
///
/// // Nothing open anywhere
/// assert_eq!(next_opening_instant(&WeekConfiguration::new(), thursday), None);
/// ```
pub fn next_opening_instant(
    config: &WeekConfiguration,
    instant: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let date = instant.date();
    let time = instant.time();

    if let Some(schedule) = business_schedule(config, date) {
        if let Some((lunch_start, lunch_end)) = schedule.lunch_window() {
            if lunch_start <= time && time <= lunch_end && lunch_end < schedule.close_time {
                let reopening = date.and_time(lunch_end);
                return Some(if time < lunch_end {
                    reopening
                } else {
                    reopening + Duration::seconds(1)
                });
            }
        }

        if time < schedule.open_time {
            return Some(date.and_time(schedule.open_time));
        }
    }

    (1..=SEARCH_HORIZON_DAYS)
        .filter_map(|offset| date.checked_add_days(Days::new(offset)))
        .find_map(|candidate| {
            business_schedule(config, candidate)
                .map(|schedule| candidate.and_time(schedule.open_time))
        })
}
