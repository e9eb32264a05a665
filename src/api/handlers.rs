//! HTTP request handlers for the store hours API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler takes one schedule snapshot from the repository and runs the
//! calendar on it.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{NaiveTime, Weekday};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::BusinessCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{DaySchedule, ScheduleEntry, WindowLayout, parse_weekday, weekday_name};

use super::clock::localize;
use super::request::{
    BulkUpdateRequest, CheckDateRequest, DateQuery, DayScheduleRequest, InstantQuery,
};
use super::response::{
    ApiError, ApiErrorResponse, BulkUpdateResponse, CheckDateResponse, DayHoursResponse,
    StatusResponse, StatusSummaryResponse, WeekDayResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/opening-hours/status", get(status_handler))
        .route("/opening-hours/schedule", get(schedule_handler))
        .route("/opening-hours/check-date", post(check_date_handler))
        .route("/store-hours/status", get(status_summary_handler))
        .route("/store-hours/today", get(today_handler))
        .route("/store-hours/week", get(week_handler))
        .route("/store-hours/schedule", get(weekly_schedule_handler))
        .route(
            "/admin/store-hours",
            get(list_schedules_handler).post(create_schedule_handler),
        )
        .route("/admin/store-hours/bulk-update", post(bulk_update_handler))
        .route(
            "/admin/store-hours/:day",
            get(get_schedule_handler)
                .put(put_schedule_handler)
                .delete(delete_schedule_handler),
        )
        .with_state(state)
}

/// Handler for GET /opening-hours/status.
///
/// Classifies the given instant, or now, and reports the next opening when
/// the store is not open.
async fn status_handler(
    State(state): State<AppState>,
    Query(query): Query<InstantQuery>,
) -> ApiResult<Json<StatusResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, at = ?query.at, "Processing status request");

    let start_time = Instant::now();
    let instant = state
        .resolve_instant(query.at.as_deref())
        .map_err(|err| reject(correlation_id, err))?;
    let week = snapshot(&state, correlation_id)?;

    let result = BusinessCalendar::new(&week).classify_status(instant);
    info!(
        correlation_id = %correlation_id,
        status = %result.status,
        next_opening = ?result.next_opening,
        duration_us = start_time.elapsed().as_micros(),
        "Status request completed"
    );

    StatusResponse::new(&result, state.offset())
        .map(Json)
        .map_err(|err| reject(correlation_id, err))
}

/// Handler for GET /opening-hours/schedule.
async fn schedule_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<DayHoursResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = ?query.date, "Processing schedule request");

    day_hours(&state, query.date.as_deref(), WindowLayout::SplitAroundLunch, correlation_id)
        .map(Json)
}

/// Handler for POST /opening-hours/check-date.
///
/// Reports the hours of a date and the first opening at or after its start.
async fn check_date_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckDateRequest>, JsonRejection>,
) -> ApiResult<Json<CheckDateResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing check-date request");

    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let start_time = Instant::now();
    let date = state
        .resolve_date(Some(request.date.as_str()))
        .map_err(|err| reject(correlation_id, err))?;
    let week = snapshot(&state, correlation_id)?;

    let calendar = BusinessCalendar::new(&week);
    let next_opening_time = calendar
        .next_opening_instant(date.and_time(NaiveTime::MIN))
        .map(|next| localize(next, state.offset()))
        .transpose()
        .map_err(|err| reject(correlation_id, err))?;
    let response = CheckDateResponse {
        date,
        is_business_day: calendar.is_business_day(date),
        hours: calendar.opening_windows_for_day(date),
        next_opening_time,
    };

    info!(
        correlation_id = %correlation_id,
        date = %date,
        is_business_day = response.is_business_day,
        duration_us = start_time.elapsed().as_micros(),
        "Check-date request completed"
    );

    Ok(Json(response))
}

/// Handler for GET /store-hours/status.
async fn status_summary_handler(
    State(state): State<AppState>,
    Query(query): Query<InstantQuery>,
) -> ApiResult<Json<StatusSummaryResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, at = ?query.at, "Processing status summary request");

    let instant = state
        .resolve_instant(query.at.as_deref())
        .map_err(|err| reject(correlation_id, err))?;
    let week = snapshot(&state, correlation_id)?;

    let calendar = BusinessCalendar::new(&week);
    let result = calendar.classify_status(instant);
    let next_opening = result
        .next_opening
        .or_else(|| calendar.next_opening_instant(instant));

    Ok(Json(StatusSummaryResponse::new(&result, next_opening)))
}

/// Handler for GET /store-hours/today.
async fn today_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<DayHoursResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = ?query.date, "Processing today request");

    day_hours(&state, query.date.as_deref(), WindowLayout::LunchAsEntry, correlation_id).map(Json)
}

/// Handler for GET /store-hours/week.
///
/// Lists seven consecutive dates starting at the given date, or today.
async fn week_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<Vec<WeekDayResponse>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = ?query.date, "Processing week request");

    let start_time = Instant::now();
    let start = state
        .resolve_date(query.date.as_deref())
        .map_err(|err| reject(correlation_id, err))?;
    let week = snapshot(&state, correlation_id)?;
    let today = state.today();

    let days: Vec<WeekDayResponse> = BusinessCalendar::new(&week)
        .week_overview(start, WindowLayout::LunchAsEntry)
        .into_iter()
        .map(|day| WeekDayResponse {
            date: day.date,
            name: weekday_name(day.weekday).to_string(),
            is_today: day.date == today,
            hours: day.windows,
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        start = %start,
        business_days = days.iter().filter(|day| !day.hours.is_empty()).count(),
        duration_us = start_time.elapsed().as_micros(),
        "Week request completed"
    );

    Ok(Json(days))
}

/// Handler for GET /store-hours/schedule.
async fn weekly_schedule_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ScheduleEntry>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly schedule request");

    let week = snapshot(&state, correlation_id)?;
    Ok(Json(BusinessCalendar::new(&week).weekly_schedule()))
}

/// Handler for GET /admin/store-hours.
async fn list_schedules_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DaySchedule>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing day schedules");

    let week = snapshot(&state, correlation_id)?;
    Ok(Json(week.iter().cloned().collect()))
}

/// Handler for POST /admin/store-hours.
///
/// Creates the schedule of a weekday that is not configured yet.
async fn create_schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<DaySchedule>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DaySchedule>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating day schedule");

    let Json(schedule) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    check_admin_rules(&schedule)
        .and_then(|()| state.repository().create_schedule(schedule))
        .map(|created| {
            info!(
                correlation_id = %correlation_id,
                weekday = weekday_name(created.weekday),
                "Day schedule created"
            );
            (StatusCode::CREATED, Json(created))
        })
        .map_err(|err| reject(correlation_id, err))
}

/// Handler for GET /admin/store-hours/{day}.
async fn get_schedule_handler(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> ApiResult<Json<DaySchedule>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, day = %day, "Fetching day schedule");

    let weekday = weekday_from_path(&day, correlation_id)?;
    state
        .repository()
        .get_schedule(weekday)
        .and_then(|schedule| schedule.ok_or(EngineError::ScheduleNotFound { weekday }))
        .map(Json)
        .map_err(|err| reject(correlation_id, err))
}

/// Handler for PUT /admin/store-hours/{day}.
///
/// Validates and stores the schedule of one weekday.
async fn put_schedule_handler(
    State(state): State<AppState>,
    Path(day): Path<String>,
    payload: Result<Json<DayScheduleRequest>, JsonRejection>,
) -> ApiResult<Json<DaySchedule>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, day = %day, "Updating day schedule");

    let weekday = weekday_from_path(&day, correlation_id)?;
    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;
    let schedule = request.into_schedule(weekday);

    check_admin_rules(&schedule)
        .and_then(|()| state.repository().upsert_schedule(schedule))
        .map(|stored| {
            info!(
                correlation_id = %correlation_id,
                weekday = weekday_name(stored.weekday),
                is_open = stored.is_open,
                "Day schedule updated"
            );
            Json(stored)
        })
        .map_err(|err| reject(correlation_id, err))
}

/// Handler for DELETE /admin/store-hours/{day}.
async fn delete_schedule_handler(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, day = %day, "Deleting day schedule");

    let weekday = weekday_from_path(&day, correlation_id)?;
    match state.repository().delete_schedule(weekday) {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(reject(correlation_id, EngineError::ScheduleNotFound { weekday })),
        Err(err) => Err(reject(correlation_id, err)),
    }
}

/// Handler for POST /admin/store-hours/bulk-update.
///
/// Every schedule is checked before any is written.
async fn bulk_update_handler(
    State(state): State<AppState>,
    payload: Result<Json<BulkUpdateRequest>, JsonRejection>,
) -> ApiResult<Json<BulkUpdateResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bulk schedule update");

    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let start_time = Instant::now();
    request
        .configs
        .iter()
        .try_for_each(check_admin_rules)
        .and_then(|()| state.repository().upsert_many(request.configs))
        .map(|configs| {
            info!(
                correlation_id = %correlation_id,
                updated = configs.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Bulk schedule update completed"
            );
            Json(BulkUpdateResponse {
                updated: configs.len(),
                configs,
            })
        })
        .map_err(|err| reject(correlation_id, err))
}

/// Shared body of the single-date endpoints.
fn day_hours(
    state: &AppState,
    date: Option<&str>,
    layout: WindowLayout,
    correlation_id: Uuid,
) -> ApiResult<DayHoursResponse> {
    let start_time = Instant::now();
    let date = state
        .resolve_date(date)
        .map_err(|err| reject(correlation_id, err))?;
    let week = snapshot(state, correlation_id)?;

    let calendar = BusinessCalendar::new(&week);
    let response = DayHoursResponse {
        date,
        is_business_day: calendar.is_business_day(date),
        hours: calendar.opening_windows_for_day_with(date, layout),
    };

    info!(
        correlation_id = %correlation_id,
        date = %date,
        is_business_day = response.is_business_day,
        windows = response.hours.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Day hours request completed"
    );

    Ok(response)
}

/// Write-time rules applied by the admin endpoints.
///
/// On top of the schedule's own validation, alternate-week scheduling is
/// only accepted for Saturday.
fn check_admin_rules(schedule: &DaySchedule) -> EngineResult<()> {
    schedule.validate()?;
    if schedule.alternate_weeks_only && schedule.weekday != Weekday::Sat {
        return Err(EngineError::AlternateWeeksNotAllowed {
            weekday: schedule.weekday,
        });
    }
    Ok(())
}

/// Reads the schedule snapshot a request runs on.
fn snapshot(
    state: &AppState,
    correlation_id: Uuid,
) -> ApiResult<crate::models::WeekConfiguration> {
    state
        .repository()
        .get_all_schedules()
        .map_err(|err| reject(correlation_id, err))
}

fn weekday_from_path(day: &str, correlation_id: Uuid) -> ApiResult<Weekday> {
    parse_weekday(day).ok_or_else(|| {
        warn!(correlation_id = %correlation_id, day = %day, "Unknown weekday");
        ApiErrorResponse::bad_request(ApiError::invalid_weekday(day))
    })
}

fn reject(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    err.into()
}

/// Maps a JSON body rejection to an error response.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("invalid time") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::api::clock::FixedClock;
    use crate::models::WeekConfiguration;
    use crate::repository::InMemoryScheduleRepository;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{FixedOffset, NaiveDateTime};
    use tower::ServiceExt;

    fn create_test_state(now: &str) -> AppState {
        let offset = FixedOffset::east_opt(0).unwrap();
        let now = NaiveDateTime::parse_from_str(now, "%Y-%m-%d %H:%M:%S").unwrap();
        AppState::new(
            Arc::new(InMemoryScheduleRepository::new(crate::calendar::scenario_week())),
            Arc::new(FixedClock::at_local(now, offset).unwrap()),
            offset,
        )
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_status_defaults_to_clock() {
        let router = create_router(create_test_state("2024-03-13 12:30:00"));
        let (status, json) = send(router, get_request("/opening-hours/status")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "lunch_break");
        assert_eq!(json["timestamp"], "2024-03-13T12:30:00+00:00");
        assert_eq!(json["next_opening_time"], "2024-03-13T12:45:00+00:00");
        assert_eq!(json["next_opening_description"], "Today at 12:45");
    }

    #[tokio::test]
    async fn test_status_with_invalid_instant_returns_400() {
        let router = create_router(create_test_state("2024-03-13 10:00:00"));
        let (status, json) = send(router, get_request("/opening-hours/status?at=yesterday")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_INSTANT");
    }

    #[tokio::test]
    async fn test_check_date_missing_field_returns_validation_error() {
        let router = create_router(create_test_state("2024-03-13 10:00:00"));
        let request = json_request("POST", "/opening-hours/check-date", "{}");
        let (status, json) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_check_date_without_content_type_is_rejected() {
        let router = create_router(create_test_state("2024-03-13 10:00:00"));
        let request = Request::builder()
            .method("POST")
            .uri("/opening-hours/check-date")
            .body(Body::from(r#"{"date":"2024-03-14"}"#))
            .unwrap();
        let (status, json) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_unknown_weekday_in_path_returns_400() {
        let router = create_router(create_test_state("2024-03-13 10:00:00"));
        let (status, json) = send(router, get_request("/admin/store-hours/Funday")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_WEEKDAY");
    }

    #[tokio::test]
    async fn test_week_marks_today() {
        let router = create_router(create_test_state("2024-03-15 09:00:00"));
        let (status, json) = send(router, get_request("/store-hours/week?date=2024-03-13")).await;

        assert_eq!(status, StatusCode::OK);
        let days = json.as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["name"], "Wednesday");
        assert_eq!(days[0]["is_today"], false);
        assert_eq!(days[2]["name"], "Friday");
        assert_eq!(days[2]["is_today"], true);
    }

    #[test]
    fn test_admin_rules_reject_alternate_weekday() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let schedule = DaySchedule::open(Weekday::Mon, t(8, 0), t(16, 0)).alternate_weeks();

        assert!(matches!(
            check_admin_rules(&schedule),
            Err(EngineError::AlternateWeeksNotAllowed {
                weekday: Weekday::Mon
            })
        ));
        let saturday = DaySchedule::open(Weekday::Sat, t(8, 0), t(16, 0)).alternate_weeks();
        assert!(check_admin_rules(&saturday).is_ok());
    }

    #[test]
    fn test_admin_rules_apply_schedule_validation_first() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let schedule = DaySchedule::open(Weekday::Mon, t(16, 0), t(8, 0)).alternate_weeks();

        assert!(matches!(
            check_admin_rules(&schedule),
            Err(EngineError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_empty_week_snapshot_is_not_an_error() {
        let state = AppState::new(
            Arc::new(InMemoryScheduleRepository::new(WeekConfiguration::new())),
            Arc::new(FixedClock::at_local(
                NaiveDateTime::parse_from_str("2024-03-13 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
                FixedOffset::east_opt(0).unwrap(),
            )
            .unwrap()),
            FixedOffset::east_opt(0).unwrap(),
        );
        assert!(snapshot(&state, Uuid::new_v4()).unwrap().is_empty());
    }
}
