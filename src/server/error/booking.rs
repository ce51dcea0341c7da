use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::booking::BookingState};

/// Scheduling rules that can reject an otherwise well-formed request.
///
/// Every variant is client-facing: the message names the rule that was violated.
#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Every configured slot for today has already started.
    #[error("No time slots remain for the selected date")]
    NoSlotsRemaining,

    /// The requested slot is not among the searchable slots for the date.
    #[error("The selected time slot is not available on that date")]
    SlotUnavailable,

    /// The slot's end time on the booking date lies in the past.
    #[error("The selected time slot has already ended")]
    SlotAlreadyEnded,

    /// Cancellation is only legal while the booking is still scheduled.
    #[error("Only scheduled bookings can be cancelled, this booking is {0}")]
    NotCancellable(BookingState),

    /// The booking starts too soon to be cancelled.
    #[error("Bookings can only be cancelled at least {required_hours} hours in advance")]
    CancellationWindowClosed {
        /// Minimum whole hours between now and the session start.
        required_hours: i64,
    },

    /// Feedback was submitted before the session ended.
    #[error("Feedback can only be submitted after the session has ended")]
    SessionNotFinished,

    /// The booking no longer accepts feedback.
    #[error("Feedback is no longer accepted for a {0} booking")]
    FeedbackClosed(BookingState),
}

/// Converts booking rule violations into 422 Unprocessable Entity responses carrying
/// the violated rule.
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
