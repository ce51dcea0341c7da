use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, time_slot::TimeSlotDto},
    server::{
        error::AppError, model::actor::Actor, model::time_slot::TimeSlot,
        service::time_slot::TimeSlotService, state::AppState,
    },
};

/// Tag for grouping time slot endpoints in OpenAPI documentation
pub static TIME_SLOT_TAG: &str = "time_slot";

/// List the time slot catalog.
///
/// Returns every bookable daily interval ordered by start time.
///
/// # Access Control
/// - Any authenticated actor
///
/// # Returns
/// - `200 OK` - Time slot catalog
/// - `401 Unauthorized` - Caller identity missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/time-slots",
    tag = TIME_SLOT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved time slots", body = Vec<TimeSlotDto>),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_time_slots(
    State(state): State<AppState>,
    _actor: Actor,
) -> Result<impl IntoResponse, AppError> {
    let service = TimeSlotService::new(&state.db);

    let slots = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            slots
                .into_iter()
                .map(TimeSlot::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
