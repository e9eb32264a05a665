//! Request types for the store hours API.
//!
//! This module defines the query strings and JSON bodies the endpoints
//! accept, and the parsing of caller-supplied instants and dates.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DaySchedule, hhmm, hhmm_option};

/// Naive date-time layouts accepted in the store's own offset.
const NAIVE_INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Query string carrying an optional instant (`?at=`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstantQuery {
    /// The instant to classify; now when absent.
    pub at: Option<String>,
}

/// Query string carrying an optional date (`?date=`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    /// The date to look at; today when absent.
    pub date: Option<String>,
}

/// Request body for `POST /opening-hours/check-date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckDateRequest {
    /// The date to check, `YYYY-MM-DD`.
    pub date: String,
}

/// Request body for `PUT /admin/store-hours/{day}`.
///
/// The weekday comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayScheduleRequest {
    /// Whether the store opens on this weekday.
    pub is_open: bool,
    /// The opening time, `HH:MM`.
    #[serde(with = "hhmm")]
    pub open_time: NaiveTime,
    /// The closing time, `HH:MM`.
    #[serde(with = "hhmm")]
    pub close_time: NaiveTime,
    /// Start of the lunch break.
    #[serde(default, with = "hhmm_option")]
    pub lunch_start: Option<NaiveTime>,
    /// End of the lunch break.
    #[serde(default, with = "hhmm_option")]
    pub lunch_end: Option<NaiveTime>,
    /// Whether the day only counts on alternate weeks.
    #[serde(default)]
    pub alternate_weeks_only: bool,
}

impl DayScheduleRequest {
    /// Builds the schedule of `weekday` from this request.
    pub fn into_schedule(self, weekday: Weekday) -> DaySchedule {
        DaySchedule {
            weekday,
            is_open: self.is_open,
            open_time: self.open_time,
            close_time: self.close_time,
            lunch_start: self.lunch_start,
            lunch_end: self.lunch_end,
            alternate_weeks_only: self.alternate_weeks_only,
        }
    }
}

/// Request body for `POST /admin/store-hours/bulk-update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkUpdateRequest {
    /// The schedules to write, each naming its weekday.
    pub configs: Vec<DaySchedule>,
}

/// Parses a caller-supplied instant into store-local time.
///
/// Accepts RFC 3339 with an offset, which is converted into `offset`, and
/// naive ISO date-times, which are taken to already be in `offset`.
///
/// # Example
///
/// ```
/// use chrono::FixedOffset;
/// use store_hours::api::parse_instant;
///
/// let store = FixedOffset::east_opt(3600).unwrap();
/// let local = parse_instant("2024-03-13T09:00:00Z", store).unwrap();
/// assert_eq!(local.to_string(), "2024-03-13 10:00:00");
///
/// assert!(parse_instant("next tuesday", store).is_err());
/// ```
pub fn parse_instant(input: &str, offset: FixedOffset) -> EngineResult<NaiveDateTime> {
    let value = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&offset).naive_local());
    }

    NAIVE_INSTANT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| EngineError::InvalidInstant {
            input: input.to_string(),
            message: "expected an ISO-8601 date-time such as 2024-03-13T10:00:00".to_string(),
        })
}

/// Parses a caller-supplied date.
///
/// A plain `YYYY-MM-DD` is taken as is; a full instant contributes its
/// store-local date.
pub fn parse_date(input: &str, offset: FixedOffset) -> EngineResult<NaiveDate> {
    let value = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    parse_instant(value, offset)
        .map(|instant| instant.date())
        .map_err(|_| EngineError::InvalidInstant {
            input: input.to_string(),
            message: "expected a date formatted YYYY-MM-DD".to_string(),
        })
}
