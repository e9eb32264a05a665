//! Opening window models.
//!
//! An [`OpeningWindow`] is a time-of-day interval of a single date. A day's
//! hours can be laid out two ways (see [`WindowLayout`]): with the lunch
//! break as a gap between two windows, or as the whole day followed by the
//! lunch break as its own tagged entry.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::time_format::{hhmm, hhmm_option, weekday_full};

/// A time-of-day interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningWindow {
    /// Start of the interval.
    #[serde(rename = "open", with = "hhmm")]
    pub start: NaiveTime,
    /// End of the interval.
    #[serde(rename = "close", with = "hhmm")]
    pub end: NaiveTime,
    /// Whether this entry is the lunch break rather than opening hours.
    #[serde(default)]
    pub is_lunch_break: bool,
}

impl OpeningWindow {
    /// Creates an opening-hours window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            is_lunch_break: false,
        }
    }

    /// Creates a lunch-break entry.
    pub fn lunch(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            is_lunch_break: true,
        }
    }
}

/// How a day with a lunch break is decomposed into windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowLayout {
    /// `[open, lunch_start]`, `[lunch_end, close]`; the lunch break is a gap.
    #[default]
    SplitAroundLunch,
    /// `[open, close]`, then `[lunch_start, lunch_end]` tagged as lunch.
    LunchAsEntry,
}

/// One calendar date of a week view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOverview {
    /// The calendar date.
    pub date: NaiveDate,
    /// The weekday of the date.
    #[serde(with = "weekday_full")]
    pub weekday: Weekday,
    /// Whether the date is a business day.
    pub is_business_day: bool,
    /// The opening windows of the date (empty when not a business day).
    pub windows: Vec<OpeningWindow>,
}

/// A lunch break as listed in the weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchBreak {
    /// Start of the lunch break.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// End of the lunch break.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

/// One configured weekday of the weekly schedule listing.
///
/// Times are only listed for open days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The weekday.
    #[serde(rename = "day", with = "weekday_full")]
    pub weekday: Weekday,
    /// Whether the store opens on this weekday.
    pub is_open: bool,
    /// Opening time, for open days.
    #[serde(rename = "opening_time", default, with = "hhmm_option")]
    pub open_time: Option<NaiveTime>,
    /// Closing time, for open days.
    #[serde(rename = "closing_time", default, with = "hhmm_option")]
    pub close_time: Option<NaiveTime>,
    /// Whether the day only counts on alternate weeks.
    pub alternate_weeks_only: bool,
    /// The lunch break, if configured.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lunch_break: Option<LunchBreak>,
}
