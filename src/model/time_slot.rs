use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TimeSlotDto {
    pub id: i32,
    pub start_time: String, // Format: "HH:MM"
    pub end_time: String,   // Format: "HH:MM"
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ScheduleSlotDto {
    pub time_slot: TimeSlotDto,
    pub booked: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CoachScheduleDto {
    pub coach_id: String,
    pub date: chrono::NaiveDate,
    pub slots: Vec<ScheduleSlotDto>,
}
