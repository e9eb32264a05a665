//! Open / lunch break / closed classification.

use chrono::NaiveDateTime;

use crate::models::{StatusResult, StoreStatus, WeekConfiguration};

use super::{business_schedule, next_opening_instant};

/// Classifies the store status at an instant.
///
/// 1. Not a business day: closed.
/// 2. Inside the lunch window: lunch break.
/// 3. Inside opening hours: open.
/// 4. Otherwise: closed.
///
/// Both ends of both windows are inclusive, so an instant exactly at the
/// closing time is still open and one exactly at the end of lunch is still
/// lunch break. Whenever the status is not open, the next opening instant is
/// attached.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use store_hours::calendar::classify_status;
/// use store_hours::models::{DaySchedule, StoreStatus, WeekConfiguration};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let week = WeekConfiguration::from_schedules(vec![
///     DaySchedule::open(Weekday::Wed, t(8, 0), t(16, 0)).with_lunch(t(12, 0), t(12, 45)),
/// ])
/// .unwrap();
///
/// let lunch = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_time(t(12, 30));
/// let result = classify_status(&week, lunch);
///
/// assert_eq!(result.status, StoreStatus::LunchBreak);
/// assert_eq!(result.next_opening, Some(lunch.date().and_time(t(12, 45))));
/// ```
pub fn classify_status(config: &WeekConfiguration, instant: NaiveDateTime) -> StatusResult {
    let status = status_at(config, instant);

    let next_opening = match status {
        StoreStatus::Open => None,
        StoreStatus::Closed | StoreStatus::LunchBreak => next_opening_instant(config, instant),
    };

    StatusResult {
        status,
        instant,
        next_opening,
    }
}

/// Classifies an instant without searching for the next opening.
pub(crate) fn status_at(config: &WeekConfiguration, instant: NaiveDateTime) -> StoreStatus {
    let Some(schedule) = business_schedule(config, instant.date()) else {
        return StoreStatus::Closed;
    };

    let time = instant.time();

    if let Some((lunch_start, lunch_end)) = schedule.lunch_window() {
        if lunch_start <= time && time <= lunch_end {
            return StoreStatus::LunchBreak;
        }
    }

    if schedule.open_time <= time && time <= schedule.close_time {
        StoreStatus::Open
    } else {
        StoreStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::scenario_week;
    use crate::models::DaySchedule;
    use chrono::{NaiveTime, Weekday};

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn status(date_str: &str, time_str: &str) -> StoreStatus {
        classify_status(&scenario_week(), make_datetime(date_str, time_str)).status
    }

    #[test]
    fn test_open_during_regular_hours() {
        let result = classify_status(&scenario_week(), make_datetime("2024-03-13", "10:00:00"));
        assert_eq!(result.status, StoreStatus::Open);
        assert_eq!(result.next_opening, None);
        assert!(result.is_open());
    }

    #[test]
    fn test_lunch_break_points_to_lunch_end() {
        let result = classify_status(&scenario_week(), make_datetime("2024-03-13", "12:30:00"));
        assert_eq!(result.status, StoreStatus::LunchBreak);
        assert!(result.is_lunch_break());
        assert_eq!(
            result.next_opening,
            Some(make_datetime("2024-03-13", "12:45:00"))
        );
    }

    #[test]
    fn test_closed_before_opening_points_to_same_day() {
        let result = classify_status(&scenario_week(), make_datetime("2024-03-13", "07:00:00"));
        assert_eq!(result.status, StoreStatus::Closed);
        assert_eq!(
            result.next_opening,
            Some(make_datetime("2024-03-13", "08:00:00"))
        );
    }

    #[test]
    fn test_closed_after_closing_points_to_next_business_day() {
        let result = classify_status(&scenario_week(), make_datetime("2024-03-13", "17:00:00"));
        assert_eq!(result.status, StoreStatus::Closed);
        assert_eq!(
            result.next_opening,
            Some(make_datetime("2024-03-15", "08:00:00"))
        );
    }

    #[test]
    fn test_closed_on_non_business_day() {
        let result = classify_status(&scenario_week(), make_datetime("2024-03-14", "10:00:00"));
        assert_eq!(result.status, StoreStatus::Closed);
        assert_eq!(
            result.next_opening,
            Some(make_datetime("2024-03-15", "08:00:00"))
        );
    }

    #[test]
    fn test_lunch_hours_on_non_business_day_are_closed() {
        assert_eq!(status("2024-03-12", "12:30:00"), StoreStatus::Closed);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(status("2024-03-13", "08:00:00"), StoreStatus::Open);
        assert_eq!(status("2024-03-13", "16:00:00"), StoreStatus::Open);
        assert_eq!(status("2024-03-13", "12:00:00"), StoreStatus::LunchBreak);
        assert_eq!(status("2024-03-13", "12:45:00"), StoreStatus::LunchBreak);
    }

    #[test]
    fn test_just_outside_boundaries() {
        assert_eq!(status("2024-03-13", "07:59:59"), StoreStatus::Closed);
        assert_eq!(status("2024-03-13", "16:00:01"), StoreStatus::Closed);
        assert_eq!(status("2024-03-13", "11:59:59"), StoreStatus::Open);
        assert_eq!(status("2024-03-13", "12:45:01"), StoreStatus::Open);
    }

    #[test]
    fn test_alternate_saturday_status() {
        assert_eq!(status("2024-03-16", "10:00:00"), StoreStatus::Closed); // week 11
        assert_eq!(status("2024-03-23", "10:00:00"), StoreStatus::Open); // week 12
    }

    #[test]
    fn test_day_without_lunch_is_open_at_noon() {
        assert_eq!(status("2024-03-23", "12:30:00"), StoreStatus::Open);
    }

    #[test]
    fn test_overnight_window_is_never_open() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let config = WeekConfiguration::from_schedules(vec![DaySchedule::open(
            Weekday::Wed,
            t(22, 0),
            t(6, 0),
        )])
        .unwrap();

        for time in ["23:00:00", "02:00:00", "12:00:00"] {
            let result = classify_status(&config, make_datetime("2024-03-13", time));
            assert_eq!(result.status, StoreStatus::Closed);
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let config = scenario_week();
        let instant = make_datetime("2024-03-13", "12:30:00");
        assert_eq!(
            classify_status(&config, instant),
            classify_status(&config, instant)
        );
    }
}
