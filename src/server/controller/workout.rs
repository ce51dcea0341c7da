use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        workout::{CreateWorkoutOptionDto, WorkoutDto, WorkoutOptionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            actor::Actor,
            workout::{Workout, WorkoutOption},
        },
        service::workout::WorkoutService,
        state::AppState,
    },
};

/// Tag for grouping workout endpoints in OpenAPI documentation
pub static WORKOUT_TAG: &str = "workout";

/// List workout options.
///
/// Returns every workout type with the coaches offering it.
///
/// # Access Control
/// - Any authenticated actor
///
/// # Returns
/// - `200 OK` - Workout options ordered by name
#[utoipa::path(
    get,
    path = "/api/workout-options",
    tag = WORKOUT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved workout options", body = Vec<WorkoutOptionDto>),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workout_options(
    State(state): State<AppState>,
    _actor: Actor,
) -> Result<impl IntoResponse, AppError> {
    let service = WorkoutService::new(&state.db);

    let options = service.list_options().await?;

    Ok((
        StatusCode::OK,
        Json(
            options
                .into_iter()
                .map(WorkoutOption::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a workout option.
///
/// # Access Control
/// - `Admin` - Only admins can extend the workout taxonomy
///
/// # Arguments
/// - `payload` - Option name, 1 to 100 characters after trimming
///
/// # Returns
/// - `201 Created` - The new workout option
/// - `400 Bad Request` - Empty or overlong name
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - An option with that name exists
#[utoipa::path(
    post,
    path = "/api/workout-options",
    tag = WORKOUT_TAG,
    request_body = CreateWorkoutOptionDto,
    responses(
        (status = 201, description = "Successfully created workout option", body = WorkoutOptionDto),
        (status = 400, description = "Invalid workout option name", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 409, description = "Workout option already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_workout_option(
    State(state): State<AppState>,
    actor: Actor,
    Json(payload): Json<CreateWorkoutOptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&actor).require(&[Permission::Admin])?;

    let service = WorkoutService::new(&state.db);

    let option = service.create_option(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(option.into_dto())))
}

/// List the workouts a coach offers.
///
/// # Access Control
/// - Any authenticated actor
///
/// # Returns
/// - `200 OK` - The coach's workouts, possibly empty
/// - `400 Bad Request` - Invalid coach id
#[utoipa::path(
    get,
    path = "/api/coaches/{coach_id}/workouts",
    tag = WORKOUT_TAG,
    params(
        ("coach_id" = String, Path, description = "Coach user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved workouts", body = Vec<WorkoutDto>),
        (status = 400, description = "Invalid coach id", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coach_workouts(
    State(state): State<AppState>,
    _actor: Actor,
    Path(coach_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = WorkoutService::new(&state.db);

    let workouts = service.get_coach_workouts(&coach_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            workouts
                .into_iter()
                .map(Workout::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Add a workout option to a coach's specializations.
///
/// # Access Control
/// - `CoachOrAdmin` - The coach themselves or an admin
///
/// # Returns
/// - `201 Created` - The new workout
/// - `403 Forbidden` - Caller is neither the coach nor an admin
/// - `404 Not Found` - Workout option not found
/// - `409 Conflict` - The coach already offers the option
#[utoipa::path(
    post,
    path = "/api/coaches/{coach_id}/workouts/{workout_option_id}",
    tag = WORKOUT_TAG,
    params(
        ("coach_id" = String, Path, description = "Coach user ID"),
        ("workout_option_id" = i32, Path, description = "Workout option ID")
    ),
    responses(
        (status = 201, description = "Successfully added specialization", body = WorkoutDto),
        (status = 400, description = "Invalid coach id", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Workout option not found", body = ErrorDto),
        (status = 409, description = "Specialization already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_coach_workout(
    State(state): State<AppState>,
    actor: Actor,
    Path((coach_id, workout_option_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&actor).require(&[Permission::CoachOrAdmin(&coach_id)])?;

    let service = WorkoutService::new(&state.db);

    let workout = service
        .add_specialization(&coach_id, workout_option_id)
        .await?;

    Ok((StatusCode::CREATED, Json(workout.into_dto())))
}

/// Remove a workout option from a coach's specializations.
///
/// Fails while bookings still reference the workout.
///
/// # Access Control
/// - `CoachOrAdmin` - The coach themselves or an admin
///
/// # Returns
/// - `204 No Content` - Specialization removed
/// - `403 Forbidden` - Caller is neither the coach nor an admin
/// - `404 Not Found` - The coach does not offer the option
/// - `409 Conflict` - Bookings reference the workout
#[utoipa::path(
    delete,
    path = "/api/coaches/{coach_id}/workouts/{workout_option_id}",
    tag = WORKOUT_TAG,
    params(
        ("coach_id" = String, Path, description = "Coach user ID"),
        ("workout_option_id" = i32, Path, description = "Workout option ID")
    ),
    responses(
        (status = 204, description = "Successfully removed specialization"),
        (status = 400, description = "Invalid coach id", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Specialization not found", body = ErrorDto),
        (status = 409, description = "Workout has bookings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_coach_workout(
    State(state): State<AppState>,
    actor: Actor,
    Path((coach_id, workout_option_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&actor).require(&[Permission::CoachOrAdmin(&coach_id)])?;

    let service = WorkoutService::new(&state.db);

    service
        .remove_specialization(&coach_id, workout_option_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
