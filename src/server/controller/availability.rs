use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, availability::AvailabilityDto, time_slot::CoachScheduleDto},
    server::{
        error::AppError,
        model::{
            actor::Actor,
            availability::{AvailabilityQuery, AvailabilityRecord},
        },
        service::availability::AvailabilityService,
        state::AppState,
        util::date::DateInput,
    },
};

/// Tag for grouping availability endpoints in OpenAPI documentation
pub static AVAILABILITY_TAG: &str = "availability";

#[derive(Deserialize)]
pub struct ScheduleParams {
    pub date: Option<String>,
    pub time_slot_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct AvailabilityParams {
    pub coach_id: Option<String>,
    pub workout_option_id: Option<i32>,
    pub time_slot_id: Option<i32>,
    pub date: Option<String>,
}

/// Get a coach's schedule for a date.
///
/// Returns the slots that can still be booked on the date with a flag marking the ones
/// the coach is already booked for. On the current date, slots that have started are
/// left out.
///
/// # Access Control
/// - Any authenticated actor
///
/// # Arguments
/// - `coach_id` - Coach whose schedule to return
/// - `params` - Optional date (defaults to today) and time slot filter
///
/// # Returns
/// - `200 OK` - The coach's schedule
/// - `400 Bad Request` - Invalid coach id or date
/// - `404 Not Found` - No time slots are configured
/// - `422 Unprocessable Entity` - No slots remain today or the slot is not available
#[utoipa::path(
    get,
    path = "/api/coaches/{coach_id}/schedule",
    tag = AVAILABILITY_TAG,
    params(
        ("coach_id" = String, Path, description = "Coach user ID"),
        ("date" = Option<String>, Query, description = "YYYY-MM-DD, date-time or day of month (default: today)"),
        ("time_slot_id" = Option<i32>, Query, description = "Restrict to one time slot")
    ),
    responses(
        (status = 200, description = "Successfully retrieved schedule", body = CoachScheduleDto),
        (status = 400, description = "Invalid coach id or date", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 404, description = "No time slots are configured", body = ErrorDto),
        (status = 422, description = "No slots remain or slot unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coach_schedule(
    State(state): State<AppState>,
    _actor: Actor,
    Path(coach_id): Path<String>,
    Query(params): Query<ScheduleParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = AvailabilityService::new(&state.db, state.directory.as_ref());

    let schedule = service
        .coach_schedule(
            &coach_id,
            params.date.map(DateInput::Text),
            params.time_slot_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Search bookable coaches.
///
/// Returns one record per coach workout matching the filters where the coach is free:
/// at the requested slot if one is given, otherwise at the earliest free slot. Other
/// free slots that day are listed as alternatives.
///
/// # Access Control
/// - Any authenticated actor
///
/// # Returns
/// - `200 OK` - Matching availability records, possibly empty
/// - `400 Bad Request` - Invalid coach id or date
/// - `404 Not Found` - No time slots are configured
/// - `422 Unprocessable Entity` - No slots remain today or the slot is not available
#[utoipa::path(
    get,
    path = "/api/availability",
    tag = AVAILABILITY_TAG,
    params(
        ("coach_id" = Option<String>, Query, description = "Only this coach"),
        ("workout_option_id" = Option<i32>, Query, description = "Only coaches offering this workout option"),
        ("time_slot_id" = Option<i32>, Query, description = "Only coaches free at this slot"),
        ("date" = Option<String>, Query, description = "YYYY-MM-DD, date-time or day of month (default: today)")
    ),
    responses(
        (status = 200, description = "Successfully resolved availability", body = Vec<AvailabilityDto>),
        (status = 400, description = "Invalid coach id or date", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 404, description = "No time slots are configured", body = ErrorDto),
        (status = 422, description = "No slots remain or slot unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    _actor: Actor,
    Query(params): Query<AvailabilityParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = AvailabilityService::new(&state.db, state.directory.as_ref());

    let records = service
        .resolve_availability(AvailabilityQuery {
            coach_id: params.coach_id,
            workout_option_id: params.workout_option_id,
            time_slot_id: params.time_slot_id,
            date: params.date.map(DateInput::Text),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            records
                .into_iter()
                .map(AvailabilityRecord::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
