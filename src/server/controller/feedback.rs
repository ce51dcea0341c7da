use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        feedback::{CreateFeedbackDto, FeedbackDto, FeedbackStatsDto, PaginatedFeedbackDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            actor::Actor,
            feedback::{CreateFeedbackParams, FeedbackSort},
        },
        service::feedback::FeedbackService,
        state::AppState,
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

#[derive(Deserialize)]
pub struct FeedbackPageParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub sort_by: Option<String>,
}

fn default_entries() -> u64 {
    10
}

/// Leave feedback on a booking.
///
/// Appends an entry to the caller's ledger for the booking. The first feedback from
/// either party marks the booking completed.
///
/// # Access Control
/// - The booking's coach or client
///
/// # Arguments
/// - `booking_id` - Booking the feedback is about
/// - `payload` - Message and optional 1-5 rating
///
/// # Returns
/// - `201 Created` - The caller's ledger with its full history
/// - `400 Bad Request` - Empty message or rating outside 1-5
/// - `403 Forbidden` - Caller is not a party to the booking
/// - `404 Not Found` - Booking not found
/// - `422 Unprocessable Entity` - Session not finished, or booking closed
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/feedback",
    tag = FEEDBACK_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Successfully recorded feedback", body = FeedbackDto),
        (status = 400, description = "Invalid feedback data", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 403, description = "Caller is not a party to the booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking modified concurrently", body = ErrorDto),
        (status = 422, description = "Feedback not accepted for this booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    actor: Actor,
    Path(booking_id): Path<i32>,
    Json(payload): Json<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db, state.directory.as_ref());

    let feedback = service
        .add_feedback(&actor, CreateFeedbackParams::from_dto(booking_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(feedback.into_dto())))
}

/// Get paginated feedback received by a coach.
///
/// Each item carries the client's profile, the latest entry and the full history.
/// Sorting applies to the returned page.
///
/// # Access Control
/// - `CoachOrAdmin` - The coach themselves or an admin
///
/// # Arguments
/// - `coach_id` - Coach receiving the feedback
/// - `params` - Zero-based page, entries per page (default 10, max 100), `sort_by`
///   of `rating` or `recent`
///
/// # Returns
/// - `200 OK` - Page of feedback with pagination metadata
/// - `400 Bad Request` - Invalid page size or sort key
/// - `403 Forbidden` - Caller is neither the coach nor an admin
#[utoipa::path(
    get,
    path = "/api/coaches/{coach_id}/feedback",
    tag = FEEDBACK_TAG,
    params(
        ("coach_id" = String, Path, description = "Coach user ID"),
        ("page" = Option<u64>, Query, description = "Page number (0-indexed)"),
        ("entries" = Option<u64>, Query, description = "Number of entries per page (default: 10, max: 100)"),
        ("sort_by" = Option<String>, Query, description = "rating or recent (default: recent)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved feedback", body = PaginatedFeedbackDto),
        (status = 400, description = "Invalid pagination or sort parameters", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coach_feedback(
    State(state): State<AppState>,
    actor: Actor,
    Path(coach_id): Path<String>,
    Query(params): Query<FeedbackPageParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&actor).require(&[Permission::CoachOrAdmin(&coach_id)])?;

    let sort = FeedbackSort::parse(params.sort_by.as_deref())?;

    let service = FeedbackService::new(&state.db, state.directory.as_ref());

    let feedback = service
        .get_feedback_for_coach(&coach_id, params.page, params.entries, sort)
        .await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Get rating statistics for a coach.
///
/// Counts the latest rating of every ledger addressed to the coach.
///
/// # Access Control
/// - Any authenticated actor
///
/// # Returns
/// - `200 OK` - Rating count, 1-5 histogram and mean (0 when nothing is rated)
/// - `400 Bad Request` - Invalid coach id
#[utoipa::path(
    get,
    path = "/api/coaches/{coach_id}/feedback/stats",
    tag = FEEDBACK_TAG,
    params(
        ("coach_id" = String, Path, description = "Coach user ID")
    ),
    responses(
        (status = 200, description = "Successfully computed statistics", body = FeedbackStatsDto),
        (status = 400, description = "Invalid coach id", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coach_feedback_stats(
    State(state): State<AppState>,
    _actor: Actor,
    Path(coach_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db, state.directory.as_ref());

    let stats = service.get_feedback_stats(&coach_id).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
