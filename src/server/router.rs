use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{availability, booking, feedback, time_slot, workout},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "coachbook", description = "Gym session booking and feedback API"),
    tags(
        (name = "time_slot", description = "Daily time slot catalog"),
        (name = "availability", description = "Coach schedules and availability search"),
        (name = "booking", description = "Booking lifecycle"),
        (name = "feedback", description = "Session feedback and coach ratings"),
        (name = "workout", description = "Workout taxonomy and coach specializations")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(time_slot::get_time_slots))
        .routes(routes!(availability::get_availability))
        .routes(routes!(availability::get_coach_schedule))
        .routes(routes!(booking::create_booking, booking::get_bookings))
        .routes(routes!(booking::get_booking))
        .routes(routes!(booking::cancel_booking))
        .routes(routes!(feedback::create_feedback))
        .routes(routes!(feedback::get_coach_feedback))
        .routes(routes!(feedback::get_coach_feedback_stats))
        .routes(routes!(
            workout::get_workout_options,
            workout::create_workout_option
        ))
        .routes(routes!(workout::get_coach_workouts))
        .routes(routes!(
            workout::add_coach_workout,
            workout::remove_coach_workout
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
