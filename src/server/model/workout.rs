//! Workout taxonomy and coach specialization models.

use crate::model::workout::{WorkoutDto, WorkoutOptionDto};

/// A taxonomy entry such as "Yoga" with the coaches currently offering it.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutOption {
    pub id: i32,
    pub name: String,
    pub coach_ids: Vec<String>,
}

impl WorkoutOption {
    /// Converts an option entity and its mappings into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The workout option entity
    /// - `mappings` - Every coach mapping that references the option
    pub fn from_entity(
        entity: entity::workout_option::Model,
        mappings: Vec<entity::workout::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            coach_ids: mappings.into_iter().map(|m| m.coach_id).collect(),
        }
    }

    pub fn into_dto(self) -> WorkoutOptionDto {
        WorkoutOptionDto {
            id: self.id,
            name: self.name,
            coach_ids: self.coach_ids,
        }
    }
}

/// A coach ↔ option mapping, i.e. a workout a coach can be booked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: i32,
    pub coach_id: String,
    pub workout_option_id: i32,
    pub workout_option_name: String,
}

impl Workout {
    /// Converts a mapping entity and its option into a domain model.
    ///
    /// Falls back to an empty option name if the option row is unavailable.
    pub fn from_entity(
        entity: entity::workout::Model,
        option: Option<entity::workout_option::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            coach_id: entity.coach_id,
            workout_option_id: entity.workout_option_id,
            workout_option_name: option.map(|o| o.name).unwrap_or_default(),
        }
    }

    pub fn into_dto(self) -> WorkoutDto {
        WorkoutDto {
            id: self.id,
            coach_id: self.coach_id,
            workout_option_id: self.workout_option_id,
            workout_option_name: self.workout_option_name,
        }
    }
}
