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
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            actor::Actor,
            booking::{BookingWithSlot, CreateBookingParams},
        },
        service::booking::BookingService,
        state::AppState,
        util::date::DateInput,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize)]
pub struct BookingListParams {
    pub date: Option<String>,
}

/// Book a session.
///
/// Books the caller with a coach for a workout at a time slot on a date. The booking
/// starts in `scheduled` state and gets one feedback ledger per direction.
///
/// # Access Control
/// - `Client` - Only clients can book sessions
///
/// # Arguments
/// - `state` - Application state containing the database connection and directory
/// - `actor` - Authenticated caller
/// - `payload` - Workout, coach, time slot and date (defaults to today)
///
/// # Returns
/// - `201 Created` - The new booking
/// - `400 Bad Request` - Invalid ids, past or unparseable date
/// - `403 Forbidden` - Caller is not a client
/// - `404 Not Found` - Unknown coach, workout or time slot
/// - `409 Conflict` - Coach or client already booked at that slot
/// - `422 Unprocessable Entity` - The slot has already ended
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully booked session", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 403, description = "Caller is not a client", body = ErrorDto),
        (status = 404, description = "Coach, workout or time slot not found", body = ErrorDto),
        (status = 409, description = "Slot already booked", body = ErrorDto),
        (status = 422, description = "Slot already ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    actor: Actor,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&actor).require(&[Permission::Client])?;

    let service = BookingService::new(&state.db, state.directory.as_ref());

    let params = CreateBookingParams::from_dto(actor.id.clone(), payload);

    let booking = service.book(params).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// List the caller's bookings.
///
/// Returns bookings where the caller is the coach or the client, ordered by date and
/// slot start.
///
/// # Access Control
/// - Any authenticated actor, limited to their own bookings
///
/// # Returns
/// - `200 OK` - The caller's bookings
/// - `400 Bad Request` - Unparseable date
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(
        ("date" = Option<String>, Query, description = "Only bookings on this date")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unparseable date", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, state.directory.as_ref());

    let bookings = service
        .get_bookings_for_actor(&actor, params.date.map(DateInput::Text))
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            bookings
                .into_iter()
                .map(BookingWithSlot::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a booking.
///
/// # Access Control
/// - The booking's coach or client
///
/// # Returns
/// - `200 OK` - The booking
/// - `403 Forbidden` - Caller is not a party to the booking
/// - `404 Not Found` - Booking not found
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 403, description = "Caller is not a party to the booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    actor: Actor,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, state.directory.as_ref());

    let booking = service.get_booking(booking_id, &actor).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Cancel a booking.
///
/// Cancels a scheduled booking at least 12 hours before it starts and releases the
/// slot for both parties.
///
/// # Access Control
/// - The booking's coach or client
///
/// # Returns
/// - `200 OK` - The cancelled booking
/// - `403 Forbidden` - Caller is not a party to the booking
/// - `404 Not Found` - Booking not found
/// - `409 Conflict` - The booking changed concurrently
/// - `422 Unprocessable Entity` - Not scheduled, or less than 12 hours before start
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully cancelled booking", body = BookingDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 403, description = "Caller is not a party to the booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking modified concurrently", body = ErrorDto),
        (status = 422, description = "Booking cannot be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    actor: Actor,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, state.directory.as_ref());

    let booking = service.cancel(booking_id, &actor).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
