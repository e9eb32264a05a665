//! Day schedule model.
//!
//! A [`DaySchedule`] is one weekday's configuration: whether the store opens
//! at all, its opening and closing times, an optional lunch window, and
//! whether the day only counts on alternate weeks.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::time_format::{hhmm, hhmm_option, weekday_full};

/// The configuration for a single weekday.
///
/// An open day without lunch fields is one continuous window
/// `[open_time, close_time]`; with both lunch fields it is the two windows
/// `[open_time, lunch_start]` and `[lunch_end, close_time]`.
///
/// # Example
///
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use store_hours::models::DaySchedule;
///
/// let monday = DaySchedule::open(
///     Weekday::Mon,
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
/// )
/// .with_lunch(
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(12, 45, 0).unwrap(),
/// );
///
/// assert!(monday.validate().is_ok());
/// assert!(monday.lunch_window().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// The weekday this schedule applies to.
    #[serde(with = "weekday_full")]
    pub weekday: Weekday,
    /// Whether the store opens on this weekday at all.
    pub is_open: bool,
    /// The opening time.
    #[serde(with = "hhmm")]
    pub open_time: NaiveTime,
    /// The closing time.
    #[serde(with = "hhmm")]
    pub close_time: NaiveTime,
    /// Start of the lunch break, if any.
    #[serde(default, with = "hhmm_option")]
    pub lunch_start: Option<NaiveTime>,
    /// End of the lunch break, if any.
    #[serde(default, with = "hhmm_option")]
    pub lunch_end: Option<NaiveTime>,
    /// Whether the day only counts as a business day on alternate weeks.
    #[serde(default)]
    pub alternate_weeks_only: bool,
}

impl DaySchedule {
    /// Creates an open day without lunch break.
    pub fn open(weekday: Weekday, open_time: NaiveTime, close_time: NaiveTime) -> Self {
        Self {
            weekday,
            is_open: true,
            open_time,
            close_time,
            lunch_start: None,
            lunch_end: None,
            alternate_weeks_only: false,
        }
    }

    /// Creates a closed day.
    ///
    /// The times are kept at midnight; they never produce an open window.
    pub fn closed(weekday: Weekday) -> Self {
        Self {
            weekday,
            is_open: false,
            open_time: NaiveTime::MIN,
            close_time: NaiveTime::MIN,
            lunch_start: None,
            lunch_end: None,
            alternate_weeks_only: false,
        }
    }

    /// Adds a lunch break.
    pub fn with_lunch(mut self, lunch_start: NaiveTime, lunch_end: NaiveTime) -> Self {
        self.lunch_start = Some(lunch_start);
        self.lunch_end = Some(lunch_end);
        self
    }

    /// Marks the day as counting only on alternate weeks.
    pub fn alternate_weeks(mut self) -> Self {
        self.alternate_weeks_only = true;
        self
    }

    /// Returns the lunch window when both ends are configured.
    ///
    /// A half-configured lunch (only one end set) is treated as no lunch.
    pub fn lunch_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.lunch_start, self.lunch_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Checks the write-time rules for a schedule.
    ///
    /// - closing time strictly after opening time (overnight windows are unsupported)
    /// - lunch fields set together or not at all
    /// - `open_time <= lunch_start < lunch_end <= close_time`
    ///
    /// Closed days are not checked: their times never produce a window.
    /// The Saturday-only rule for alternate weeks is a data-entry policy
    /// enforced by the admin API, not here.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.is_open {
            return Ok(());
        }

        if self.close_time <= self.open_time {
            return Err(self.invalid("closing time must be after opening time"));
        }

        match (self.lunch_start, self.lunch_end) {
            (None, None) => Ok(()),
            (Some(_), None) | (None, Some(_)) => {
                Err(self.invalid("lunch start and lunch end must be set together"))
            }
            (Some(start), Some(end)) => {
                if start >= end {
                    Err(self.invalid("lunch end must be after lunch start"))
                } else if start < self.open_time || end > self.close_time {
                    Err(self.invalid("lunch break must fall within opening hours"))
                } else {
                    Ok(())
                }
            }
        }
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidSchedule {
            weekday: self.weekday,
            message: message.to_string(),
        }
    }
}
