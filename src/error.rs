//! Error types for the store hours engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading, validating and
//! querying store schedules.
//!
//! Two outcomes that look like failures are deliberately *not* errors:
//! a weekday with no configured schedule is simply not a business day, and
//! a configuration with no reachable opening yields `None` from the
//! next-opening search.

use chrono::Weekday;
use thiserror::Error;

use crate::models::weekday_name;

/// The main error type for the store hours engine.
///
/// # Example
///
/// ```
/// use store_hours::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/store.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/store.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A caller supplied a date or date-time that could not be parsed.
    #[error("Invalid instant '{input}': {message}")]
    InvalidInstant {
        /// The raw input as received.
        input: String,
        /// A description of why it was rejected.
        message: String,
    },

    /// A day schedule violates the write-time validation rules.
    #[error("Invalid schedule for {}: {message}", day(.weekday))]
    InvalidSchedule {
        /// The weekday of the offending schedule.
        weekday: Weekday,
        /// A description of the violated rule.
        message: String,
    },

    /// A week configuration was built with two schedules for the same weekday.
    #[error("Duplicate schedule for {}", day(.weekday))]
    DuplicateWeekday {
        /// The duplicated weekday.
        weekday: Weekday,
    },

    /// No schedule is stored for the requested weekday.
    #[error("No schedule configured for {}", day(.weekday))]
    ScheduleNotFound {
        /// The weekday that was looked up.
        weekday: Weekday,
    },

    /// Alternate-week scheduling was requested for a day other than Saturday.
    #[error("Alternate weeks can only be set for Saturday (got {})", day(.weekday))]
    AlternateWeeksNotAllowed {
        /// The weekday the flag was requested for.
        weekday: Weekday,
    },

    /// The schedule store failed.
    #[error("Repository error: {message}")]
    Repository {
        /// A description of the storage failure.
        message: String,
    },
}

fn day(weekday: &Weekday) -> &'static str {
    weekday_name(*weekday)
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
