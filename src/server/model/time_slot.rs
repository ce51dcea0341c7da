//! Time slot catalog domain models.
//!
//! Time slots are wall-clock intervals without a date. They become concrete instants only
//! when combined with a booking date through `starts_at` / `ends_at`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    model::time_slot::{CoachScheduleDto, ScheduleSlotDto, TimeSlotDto},
    server::{error::internal::InternalError, util::parse::parse_time_of_day},
};

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// A bookable daily interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The time slot entity from the database
    ///
    /// # Returns
    /// - `Ok(TimeSlot)` - Slot with parsed wall-clock bounds
    /// - `Err(InternalError::InvalidTimeOfDay)` - A stored bound is not `HH:MM`
    pub fn from_entity(entity: entity::time_slot::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            start_time: parse_time_of_day(&entity.start_time)?,
            end_time: parse_time_of_day(&entity.end_time)?,
        })
    }

    /// Start of the slot on the given date.
    pub fn starts_at(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start_time)
    }

    /// End of the slot on the given date.
    ///
    /// A slot whose end is not after its start wraps past midnight and ends the next day.
    pub fn ends_at(&self, date: NaiveDate) -> NaiveDateTime {
        let end = date.and_time(self.end_time);

        if self.end_time <= self.start_time {
            end + Duration::days(1)
        } else {
            end
        }
    }

    pub fn into_dto(self) -> TimeSlotDto {
        TimeSlotDto {
            id: self.id,
            start_time: self.start_time.format(TIME_OF_DAY_FORMAT).to_string(),
            end_time: self.end_time.format(TIME_OF_DAY_FORMAT).to_string(),
        }
    }
}

/// A slot in a coach's schedule with its booked flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSlot {
    pub time_slot: TimeSlot,
    pub booked: bool,
}

/// A coach's slots for a single date.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachSchedule {
    pub coach_id: String,
    pub date: NaiveDate,
    pub slots: Vec<ScheduleSlot>,
}

impl CoachSchedule {
    pub fn into_dto(self) -> CoachScheduleDto {
        CoachScheduleDto {
            coach_id: self.coach_id,
            date: self.date,
            slots: self
                .slots
                .into_iter()
                .map(|slot| ScheduleSlotDto {
                    time_slot: slot.time_slot.into_dto(),
                    booked: slot.booked,
                })
                .collect(),
        }
    }
}
