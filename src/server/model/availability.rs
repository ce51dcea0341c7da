use chrono::NaiveDate;

use crate::{
    model::availability::AvailabilityDto,
    server::{
        model::{directory::UserProfile, time_slot::TimeSlot, workout::Workout},
        util::date::DateInput,
    },
};

/// Filters for the composite availability query. Every filter is optional.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityQuery {
    pub coach_id: Option<String>,
    pub workout_option_id: Option<i32>,
    pub time_slot_id: Option<i32>,
    pub date: Option<DateInput>,
}

/// A coach that can be booked for a workout on a date.
///
/// `time_slot` is the requested slot, or the earliest free one when no slot was requested.
/// `alternative_slots` are the coach's other free slots that day.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityRecord {
    pub coach: UserProfile,
    pub workout: Workout,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub alternative_slots: Vec<TimeSlot>,
}

impl AvailabilityRecord {
    pub fn into_dto(self) -> AvailabilityDto {
        AvailabilityDto {
            coach: self.coach.into_dto(),
            workout_id: self.workout.id,
            workout_option_id: self.workout.workout_option_id,
            workout_option_name: self.workout.workout_option_name,
            date: self.date,
            time_slot: self.time_slot.into_dto(),
            alternative_slots: self
                .alternative_slots
                .into_iter()
                .map(TimeSlot::into_dto)
                .collect(),
        }
    }
}
