use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::time_slot::TimeSlotDto;

/// A booking date as sent by clients.
///
/// Accepts either a bare day-of-month number (against the current month) or a date string
/// (`YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]` or RFC 3339).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum BookingDateDto {
    Day(u32),
    Text(String),
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    pub workout_id: i32,
    pub coach_id: String,
    pub time_slot_id: i32,
    pub date: Option<BookingDateDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub coach_id: String,
    pub client_id: String,
    pub workout_id: i32,
    pub time_slot: TimeSlotDto,
    pub date: NaiveDate,
    pub state: String, // "scheduled" | "waiting_for_feedback" | "completed" | "cancelled"
    pub client_feedback_id: Option<i32>,
    pub coach_feedback_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}
