use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::time_slot::TimeSlotDto;

/// Public profile of a user as returned by the user directory.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserProfileDto {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub coach: UserProfileDto,
    pub workout_id: i32,
    pub workout_option_id: i32,
    pub workout_option_name: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlotDto,
    pub alternative_slots: Vec<TimeSlotDto>,
}
