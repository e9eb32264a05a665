//! HTTP API module for the store hours engine.
//!
//! This module provides the REST endpoints for querying the store's status
//! and opening hours, and the admin endpoints for editing the weekly
//! schedule.

mod clock;
mod handlers;
mod presentation;
mod request;
mod response;
mod state;

pub use clock::{Clock, FixedClock, SystemClock, localize};
pub use handlers::create_router;
pub use presentation::{NO_UPCOMING_OPENING, describe_next_opening};
pub use request::{
    BulkUpdateRequest, CheckDateRequest, DateQuery, DayScheduleRequest, InstantQuery, parse_date,
    parse_instant,
};
pub use response::{
    ApiError, ApiErrorResponse, BulkUpdateResponse, CheckDateResponse, DayHoursResponse,
    StatusResponse, StatusSummaryResponse, WeekDayResponse,
};
pub use state::AppState;
