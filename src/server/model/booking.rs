//! Booking domain models and parameters.
//!
//! A booking is one engagement between a coach and a client at one time slot on one date.
//! It moves through `BookingState` and owns two feedback ledgers, one per direction.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::{
        error::internal::InternalError,
        model::time_slot::TimeSlot,
        util::date::DateInput,
    },
};

/// Lifecycle state of a booking.
///
/// `Scheduled` is the initial state. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    Scheduled,
    WaitingForFeedback,
    Completed,
    Cancelled,
}

impl BookingState {
    /// Value stored in the `state` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::WaitingForFeedback => "waiting_for_feedback",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses the value stored in the `state` column.
    ///
    /// # Returns
    /// - `Ok(BookingState)` - Known lifecycle state
    /// - `Err(InternalError::UnknownBookingState)` - Storage holds an unexpected value
    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "scheduled" => Ok(Self::Scheduled),
            "waiting_for_feedback" => Ok(Self::WaitingForFeedback),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(InternalError::UnknownBookingState(other.to_string())),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a booking an actor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Client,
    Coach,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub time_slot_id: i32,
    pub coach_id: String,
    pub client_id: String,
    pub workout_id: i32,
    pub date: NaiveDate,
    pub state: BookingState,
    pub client_feedback_id: Option<i32>,
    pub coach_feedback_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The booking entity from the database
    ///
    /// # Returns
    /// - `Ok(Booking)` - Successfully converted domain model
    /// - `Err(InternalError::UnknownBookingState)` - Stored state is not recognised
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            time_slot_id: entity.time_slot_id,
            coach_id: entity.coach_id,
            client_id: entity.client_id,
            workout_id: entity.workout_id,
            date: entity.date,
            state: BookingState::parse(&entity.state)?,
            client_feedback_id: entity.client_feedback_id,
            coach_feedback_id: entity.coach_feedback_id,
            created_at: entity.created_at,
        })
    }

    /// Returns the side of the booking the actor is on, if any.
    pub fn party_of(&self, actor_id: &str) -> Option<Party> {
        if self.client_id == actor_id {
            Some(Party::Client)
        } else if self.coach_id == actor_id {
            Some(Party::Coach)
        } else {
            None
        }
    }
}

/// A booking together with the time slot it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithSlot {
    pub booking: Booking,
    pub time_slot: TimeSlot,
}

impl BookingWithSlot {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.booking.id,
            coach_id: self.booking.coach_id,
            client_id: self.booking.client_id,
            workout_id: self.booking.workout_id,
            time_slot: self.time_slot.into_dto(),
            date: self.booking.date,
            state: self.booking.state.as_str().to_string(),
            client_feedback_id: self.booking.client_feedback_id,
            coach_feedback_id: self.booking.coach_feedback_id,
            created_at: self.booking.created_at,
        }
    }
}

/// Parameters for booking a session.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub client_id: String,
    pub coach_id: String,
    pub workout_id: i32,
    pub time_slot_id: i32,
    /// Requested date as sent by the client; `None` means today.
    pub date: Option<DateInput>,
}

impl CreateBookingParams {
    /// Converts a DTO to booking parameters for the requesting client.
    pub fn from_dto(client_id: String, dto: CreateBookingDto) -> Self {
        Self {
            client_id,
            coach_id: dto.coach_id,
            workout_id: dto.workout_id,
            time_slot_id: dto.time_slot_id,
            date: dto.date.map(DateInput::from),
        }
    }
}

/// Row values for a new booking, resolved and validated by the service.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub time_slot_id: i32,
    pub coach_id: String,
    pub client_id: String,
    pub workout_id: i32,
    pub date: NaiveDate,
}
