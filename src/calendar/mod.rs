//! The business calendar engine.
//!
//! This module answers the schedule questions for a [`WeekConfiguration`]:
//! whether a date is a business day, whether the store is open, closed or on
//! lunch break at an instant, when it next opens, and which opening windows a
//! date has.
//!
//! Every function is pure: it takes the configuration snapshot and the
//! instant or date explicitly and never reads the system clock. Instants are
//! store-local wall-clock times.
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime, Weekday};
//! use store_hours::calendar::BusinessCalendar;
//! use store_hours::models::{DaySchedule, StoreStatus, WeekConfiguration};
//!
//! let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
//! let week = WeekConfiguration::from_schedules(vec![
//!     DaySchedule::open(Weekday::Wed, t(8, 0), t(16, 0)).with_lunch(t(12, 0), t(12, 45)),
//!     DaySchedule::open(Weekday::Fri, t(8, 0), t(16, 0)).with_lunch(t(12, 0), t(12, 45)),
//! ])
//! .unwrap();
//! let calendar = BusinessCalendar::new(&week);
//!
//! let thursday = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap().and_time(t(10, 0));
//! let result = calendar.classify_status(thursday);
//!
//! assert_eq!(result.status, StoreStatus::Closed);
//! assert_eq!(
//!     result.next_opening,
//!     Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_time(t(8, 0)))
//! );
//! ```

mod business_day;
mod next_opening;
mod opening_windows;
mod status;
mod week_parity;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    DayOverview, OpeningWindow, ScheduleEntry, StatusResult, StoreStatus, WeekConfiguration,
    WindowLayout,
};

pub use business_day::{business_schedule, is_business_day};
pub use next_opening::{SEARCH_HORIZON_DAYS, next_opening_instant};
pub use opening_windows::{WEEK_VIEW_DAYS, opening_windows_for_day, week_overview, weekly_schedule};
pub use status::classify_status;
pub use week_parity::{is_alternate_week, week_of_year};

/// Query facade over a borrowed [`WeekConfiguration`] snapshot.
///
/// The calendar holds no state of its own; build one per query from a fresh
/// repository read.
#[derive(Debug, Clone, Copy)]
pub struct BusinessCalendar<'a> {
    config: &'a WeekConfiguration,
}

impl<'a> BusinessCalendar<'a> {
    /// Creates a calendar over a configuration snapshot.
    pub fn new(config: &'a WeekConfiguration) -> Self {
        Self { config }
    }

    /// Returns the configuration snapshot.
    pub fn config(&self) -> &'a WeekConfiguration {
        self.config
    }

    /// See [`is_business_day`].
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        is_business_day(self.config, date)
    }

    /// See [`classify_status`].
    pub fn classify_status(&self, instant: NaiveDateTime) -> StatusResult {
        classify_status(self.config, instant)
    }

    /// Returns true if the store is open at `instant`.
    pub fn is_open(&self, instant: NaiveDateTime) -> bool {
        status::status_at(self.config, instant) == StoreStatus::Open
    }

    /// Returns true if the store is on its lunch break at `instant`.
    pub fn is_lunch_break(&self, instant: NaiveDateTime) -> bool {
        status::status_at(self.config, instant) == StoreStatus::LunchBreak
    }

    /// See [`next_opening_instant`].
    pub fn next_opening_instant(&self, instant: NaiveDateTime) -> Option<NaiveDateTime> {
        next_opening_instant(self.config, instant)
    }

    /// Opening windows of a date with the lunch break as a gap.
    pub fn opening_windows_for_day(&self, date: NaiveDate) -> Vec<OpeningWindow> {
        opening_windows_for_day(self.config, date, WindowLayout::SplitAroundLunch)
    }

    /// Opening windows of a date in the given layout.
    pub fn opening_windows_for_day_with(
        &self,
        date: NaiveDate,
        layout: WindowLayout,
    ) -> Vec<OpeningWindow> {
        opening_windows_for_day(self.config, date, layout)
    }

    /// See [`week_overview`].
    pub fn week_overview(&self, start: NaiveDate, layout: WindowLayout) -> Vec<DayOverview> {
        week_overview(self.config, start, layout)
    }

    /// See [`weekly_schedule`].
    pub fn weekly_schedule(&self) -> Vec<ScheduleEntry> {
        weekly_schedule(self.config)
    }
}

/// Mon/Wed/Fri 08:00-16:00 with lunch 12:00-12:45, alternate Saturdays
/// 08:00-16:00, every other day configured closed.
#[cfg(test)]
pub(crate) fn scenario_week() -> WeekConfiguration {
    use crate::models::DaySchedule;
    use chrono::{NaiveTime, Weekday};

    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    let regular = |weekday| {
        DaySchedule::open(weekday, t(8, 0), t(16, 0)).with_lunch(t(12, 0), t(12, 45))
    };
    let closed = |weekday| {
        let mut schedule = DaySchedule::open(weekday, t(8, 0), t(16, 0));
        schedule.is_open = false;
        schedule
    };

    WeekConfiguration::from_schedules(vec![
        regular(Weekday::Mon),
        closed(Weekday::Tue),
        regular(Weekday::Wed),
        closed(Weekday::Thu),
        regular(Weekday::Fri),
        DaySchedule::open(Weekday::Sat, t(8, 0), t(16, 0)).alternate_weeks(),
        closed(Weekday::Sun),
    ])
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DaySchedule;
    use chrono::{NaiveTime, Weekday};

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// Scenario A: open on a regular Wednesday, lunch at 12:30
    #[test]
    fn test_scenario_a_wednesday() {
        let week = scenario_week();
        let calendar = BusinessCalendar::new(&week);

        assert_eq!(
            calendar.classify_status(make_datetime("2024-03-13", "10:00:00")).status,
            StoreStatus::Open
        );

        let lunch = calendar.classify_status(make_datetime("2024-03-13", "12:30:00"));
        assert_eq!(lunch.status, StoreStatus::LunchBreak);
        assert_eq!(lunch.next_opening, Some(make_datetime("2024-03-13", "12:45:00")));
    }

    /// Scenario B: Thursday is closed, Friday opens at 08:00
    #[test]
    fn test_scenario_b_thursday() {
        let week = scenario_week();
        let result =
            BusinessCalendar::new(&week).classify_status(make_datetime("2024-03-14", "10:00:00"));

        assert_eq!(result.status, StoreStatus::Closed);
        assert_eq!(result.next_opening, Some(make_datetime("2024-03-15", "08:00:00")));
    }

    /// Scenario C: alternate Saturdays follow ISO week parity
    #[test]
    fn test_scenario_c_alternate_saturdays() {
        let week = scenario_week();
        let calendar = BusinessCalendar::new(&week);

        assert!(!calendar.is_business_day(make_date("2024-03-16")));
        assert!(calendar.is_business_day(make_date("2024-03-23")));
    }

    /// Scenario D: no open day anywhere
    #[test]
    fn test_scenario_d_never_open() {
        let week = WeekConfiguration::from_schedules(
            crate::models::WEEKDAYS.iter().map(|&day| DaySchedule::closed(day)),
        )
        .unwrap();
        let calendar = BusinessCalendar::new(&week);

        for (date, time) in [
            ("2024-03-13", "10:00:00"),
            ("2024-03-16", "00:00:00"),
            ("2024-12-31", "23:59:59"),
        ] {
            let instant = make_datetime(date, time);
            assert_eq!(calendar.next_opening_instant(instant), None);
            let result = calendar.classify_status(instant);
            assert_eq!(result.status, StoreStatus::Closed);
            assert_eq!(result.next_opening, None);
        }
    }

    #[test]
    fn test_predicates_agree_with_classification() {
        let week = scenario_week();
        let calendar = BusinessCalendar::new(&week);

        let open = make_datetime("2024-03-13", "09:00:00");
        assert!(calendar.is_open(open));
        assert!(!calendar.is_lunch_break(open));

        let lunch = make_datetime("2024-03-13", "12:10:00");
        assert!(!calendar.is_open(lunch));
        assert!(calendar.is_lunch_break(lunch));
    }

    #[test]
    fn test_windows_default_to_split_layout() {
        let week = scenario_week();
        let calendar = BusinessCalendar::new(&week);
        let date = make_date("2024-03-13");

        assert_eq!(
            calendar.opening_windows_for_day(date),
            calendar.opening_windows_for_day_with(date, WindowLayout::SplitAroundLunch)
        );
    }

    #[test]
    fn test_stale_snapshot_is_used_as_given() {
        let mut week = scenario_week();
        let snapshot = week.clone();
        week.insert(DaySchedule::closed(Weekday::Wed));

        let t = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let instant = make_date("2024-03-13").and_time(t);
        assert!(BusinessCalendar::new(&snapshot).is_open(instant));
        assert!(!BusinessCalendar::new(&week).is_open(instant));
    }
}
