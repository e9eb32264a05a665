//! Response types for the store hours API.
//!
//! This module defines the JSON response bodies, the error response
//! structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DaySchedule, OpeningWindow, StatusResult, StoreStatus, hhmm_option, weekday_name,
};

use super::clock::localize;
use super::presentation::describe_next_opening;

/// Response body for `GET /opening-hours/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `open`, `closed` or `lunch_break`.
    pub status: StoreStatus,
    /// The classified instant, in the store's offset.
    pub timestamp: DateTime<FixedOffset>,
    /// The next opening instant, when not open and one was found.
    pub next_opening_time: Option<DateTime<FixedOffset>>,
    /// Human-readable form of the next opening, when not open.
    pub next_opening_description: Option<String>,
}

impl StatusResponse {
    /// Renders a classification in the store's offset.
    ///
    /// Fails when either instant cannot be expressed in `offset`.
    pub fn new(result: &StatusResult, offset: FixedOffset) -> EngineResult<Self> {
        let description = match result.status {
            StoreStatus::Open => None,
            _ => Some(describe_next_opening(result.instant, result.next_opening)),
        };

        Ok(Self {
            status: result.status,
            timestamp: localize(result.instant, offset)?,
            next_opening_time: result
                .next_opening
                .map(|next| localize(next, offset))
                .transpose()?,
            next_opening_description: description,
        })
    }
}

/// Response body for `GET /store-hours/status`.
///
/// The compact form shown on the storefront: flags plus the time of day of
/// the next opening. The full instant is on `/opening-hours/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSummaryResponse {
    /// Whether the store is open and not on lunch break.
    pub is_open: bool,
    /// Whether the store is on its lunch break.
    pub is_lunch_break: bool,
    /// `HH:MM` of the next opening, if one was found.
    #[serde(with = "hhmm_option")]
    pub next_opening_time: Option<NaiveTime>,
    /// The store-local date of the classified instant.
    pub date: NaiveDate,
}

impl StatusSummaryResponse {
    /// Summarizes a classification.
    ///
    /// While open, the next opening is still searched from `instant` so the
    /// storefront can show when the following session starts.
    pub fn new(result: &StatusResult, next_opening: Option<NaiveDateTime>) -> Self {
        Self {
            is_open: result.status == StoreStatus::Open,
            is_lunch_break: result.status == StoreStatus::LunchBreak,
            next_opening_time: next_opening.map(|next| next.time()),
            date: result.instant.date(),
        }
    }
}

/// Response body for the single-date schedule endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHoursResponse {
    /// The date looked at.
    pub date: NaiveDate,
    /// Whether the date is a business day.
    pub is_business_day: bool,
    /// The opening windows of the date.
    pub hours: Vec<OpeningWindow>,
}

/// Response body for `POST /opening-hours/check-date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckDateResponse {
    /// The date checked.
    pub date: NaiveDate,
    /// Whether the date is a business day.
    pub is_business_day: bool,
    /// The opening windows of the date, lunch as a gap.
    pub hours: Vec<OpeningWindow>,
    /// The first opening at or after the start of the date.
    pub next_opening_time: Option<DateTime<FixedOffset>>,
}

/// One day of `GET /store-hours/week`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekDayResponse {
    /// The calendar date.
    pub date: NaiveDate,
    /// The weekday name.
    pub name: String,
    /// Whether the date is the store's current date.
    pub is_today: bool,
    /// The opening windows of the date, lunch as its own entry.
    pub hours: Vec<OpeningWindow>,
}

/// Response body for `POST /admin/store-hours/bulk-update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkUpdateResponse {
    /// How many schedules were written.
    pub updated: usize,
    /// The written schedules.
    pub configs: Vec<DaySchedule>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown weekday error response.
    pub fn invalid_weekday(day: &str) -> Self {
        Self::with_details(
            "INVALID_WEEKDAY",
            format!("Unknown weekday: {}", day),
            "Use a weekday name such as Monday or Mon",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInstant { input, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INSTANT",
                    format!("Invalid date or time: {}", input),
                    message,
                ),
            },
            EngineError::InvalidSchedule { weekday, message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_SCHEDULE",
                    format!("Invalid schedule for {}", weekday_name(weekday)),
                    message,
                ),
            },
            EngineError::DuplicateWeekday { weekday } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new(
                    "DUPLICATE_WEEKDAY",
                    format!("{} appears more than once", weekday_name(weekday)),
                ),
            },
            EngineError::ScheduleNotFound { weekday } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "SCHEDULE_NOT_FOUND",
                    format!("No schedule configured for {}", weekday_name(weekday)),
                ),
            },
            EngineError::AlternateWeeksNotAllowed { weekday } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "ALTERNATE_WEEKS_NOT_ALLOWED",
                    format!(
                        "Alternate weeks can only be set for Saturday, not {}",
                        weekday_name(weekday)
                    ),
                    "Clear alternate_weeks_only or move the schedule to Saturday",
                ),
            },
            EngineError::Repository { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "REPOSITORY_ERROR",
                    "Schedule storage failed",
                    message,
                ),
            },
        }
    }
}
