//! Opening-window decomposition, week views and the weekly schedule listing.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{
    DayOverview, LunchBreak, OpeningWindow, ScheduleEntry, WeekConfiguration, WindowLayout,
};

use super::{business_schedule, is_business_day};

/// Number of consecutive dates in a week view.
pub const WEEK_VIEW_DAYS: u64 = 7;

/// Decomposes a date's hours into opening windows.
///
/// Returns no windows when the date is not a business day, a single
/// `[open, close]` window when the day has no lunch break, and otherwise two
/// windows laid out according to `layout`. The result is recomputed on every
/// call.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use store_hours::calendar::opening_windows_for_day;
/// use store_hours::models::{DaySchedule, WeekConfiguration, WindowLayout};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let week = WeekConfiguration::from_schedules(vec![
///     DaySchedule::open(Weekday::Wed, t(8, 0), t(16, 0)).with_lunch(t(12, 0), t(12, 45)),
/// ])
/// .unwrap();
/// let wednesday = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
///
/// let split = opening_windows_for_day(&week, wednesday, WindowLayout::SplitAroundLunch);
/// assert_eq!((split[0].start, split[0].end), (t(8, 0), t(12, 0)));
/// assert_eq!((split[1].start, split[1].end), (t(12, 45), t(16, 0)));
///
/// let tagged = opening_windows_for_day(&week, wednesday, WindowLayout::LunchAsEntry);
/// assert!(tagged[1].is_lunch_break);
/// ```
pub fn opening_windows_for_day(
    config: &WeekConfiguration,
    date: NaiveDate,
    layout: WindowLayout,
) -> Vec<OpeningWindow> {
    let Some(schedule) = business_schedule(config, date) else {
        return Vec::new();
    };

    let (open, close) = (schedule.open_time, schedule.close_time);

    match (schedule.lunch_window(), layout) {
        (None, _) => vec![OpeningWindow::new(open, close)],
        (Some((lunch_start, lunch_end)), WindowLayout::SplitAroundLunch) => vec![
            OpeningWindow::new(open, lunch_start),
            OpeningWindow::new(lunch_end, close),
        ],
        (Some((lunch_start, lunch_end)), WindowLayout::LunchAsEntry) => vec![
            OpeningWindow::new(open, close),
            OpeningWindow::lunch(lunch_start, lunch_end),
        ],
    }
}

/// Builds a seven-day view starting at `start`.
pub fn week_overview(
    config: &WeekConfiguration,
    start: NaiveDate,
    layout: WindowLayout,
) -> Vec<DayOverview> {
    (0..WEEK_VIEW_DAYS)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| DayOverview {
            date,
            weekday: date.weekday(),
            is_business_day: is_business_day(config, date),
            windows: opening_windows_for_day(config, date, layout),
        })
        .collect()
}

/// Lists the configured weekdays, Monday first.
///
/// This is the raw configuration, independent of any date: alternate-week
/// days are listed with their flag rather than resolved. Times are omitted
/// for closed days.
pub fn weekly_schedule(config: &WeekConfiguration) -> Vec<ScheduleEntry> {
    config
        .iter()
        .map(|schedule| ScheduleEntry {
            weekday: schedule.weekday,
            is_open: schedule.is_open,
            open_time: schedule.is_open.then_some(schedule.open_time),
            close_time: schedule.is_open.then_some(schedule.close_time),
            alternate_weeks_only: schedule.alternate_weeks_only,
            lunch_break: schedule
                .lunch_window()
                .map(|(start, end)| LunchBreak { start, end }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::scenario_week;
    use chrono::{NaiveTime, Weekday};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_split_layout_omits_lunch_gap() {
        let windows =
            opening_windows_for_day(
                &scenario_week(),
                make_date("2024-03-13"),
                WindowLayout::SplitAroundLunch,
            );

        assert_eq!(
            windows,
            vec![
                OpeningWindow::new(t(8, 0), t(12, 0)),
                OpeningWindow::new(t(12, 45), t(16, 0)),
            ]
        );
        assert!(windows.iter().all(|w| !w.is_lunch_break));
    }

    #[test]
    fn test_lunch_as_entry_layout_tags_lunch() {
        let windows =
            opening_windows_for_day(
                &scenario_week(),
                make_date("2024-03-13"),
                WindowLayout::LunchAsEntry,
            );

        assert_eq!(
            windows,
            vec![
                OpeningWindow::new(t(8, 0), t(16, 0)),
                OpeningWindow::lunch(t(12, 0), t(12, 45)),
            ]
        );
    }

    #[test]
    fn test_day_without_lunch_has_single_window_in_both_layouts() {
        let saturday = make_date("2024-03-23"); // week 12, included
        for layout in [WindowLayout::SplitAroundLunch, WindowLayout::LunchAsEntry] {
            let windows = opening_windows_for_day(&scenario_week(), saturday, layout);
            assert_eq!(windows, vec![OpeningWindow::new(t(8, 0), t(16, 0))]);
        }
    }

    #[test]
    fn test_non_business_days_have_no_windows() {
        let config = scenario_week();
        let layout = WindowLayout::default();
        assert!(opening_windows_for_day(&config, make_date("2024-03-14"), layout).is_empty());
        // excluded alternate Saturday
        assert!(opening_windows_for_day(&config, make_date("2024-03-16"), layout).is_empty());
    }

    #[test]
    fn test_week_overview_covers_seven_consecutive_days() {
        let overview =
            week_overview(&scenario_week(), make_date("2024-03-18"), WindowLayout::default());

        assert_eq!(overview.len(), 7);
        assert_eq!(overview[0].weekday, Weekday::Mon);
        assert_eq!(overview[6].date, make_date("2024-03-24"));

        let business: Vec<Weekday> = overview
            .iter()
            .filter(|day| day.is_business_day)
            .map(|day| day.weekday)
            .collect();
        assert_eq!(
            business,
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri, Weekday::Sat]
        );
        assert_eq!(overview[0].windows.len(), 2);
        assert!(overview[1].windows.is_empty());
    }

    #[test]
    fn test_weekly_schedule_lists_raw_configuration() {
        let schedule = weekly_schedule(&scenario_week());

        assert_eq!(schedule.len(), 7);
        assert_eq!(schedule[0].weekday, Weekday::Mon);
        assert_eq!(schedule[0].open_time, Some(t(8, 0)));
        assert_eq!(
            schedule[0].lunch_break,
            Some(LunchBreak {
                start: t(12, 0),
                end: t(12, 45)
            })
        );

        // closed Tuesday lists no times
        assert!(!schedule[1].is_open);
        assert_eq!(schedule[1].open_time, None);
        assert_eq!(schedule[1].close_time, None);

        // Saturday keeps its flag regardless of the current week
        assert!(schedule[5].alternate_weeks_only);
        assert!(schedule[5].is_open);
    }
}
