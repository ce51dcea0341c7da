use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{booking::BookingRepository, workout::WorkoutRepository},
    error::AppError,
    model::workout::{Workout, WorkoutOption},
    util::parse::validate_actor_id,
};

const MAX_OPTION_NAME_LEN: usize = 100;

pub const WORKOUT_HAS_BOOKINGS: &str = "Workout has bookings and cannot be removed";

pub struct WorkoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkoutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a workout option
    ///
    /// # Returns
    /// - `Ok(WorkoutOption)` - The new option, offered by no coach yet
    /// - `Err(AppError::BadRequest)` - Empty or overlong name
    /// - `Err(AppError::Conflict)` - An option with the same name exists
    pub async fn create_option(&self, name: &str) -> Result<WorkoutOption, AppError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_OPTION_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "Workout option name must be 1-{} characters",
                MAX_OPTION_NAME_LEN
            )));
        }

        let option = WorkoutRepository::new(self.db)
            .create_option(name)
            .await
            .map_err(|e| {
                conflict_on_unique(e, format!("Workout option '{}' already exists", name))
            })?;

        Ok(WorkoutOption::from_entity(option, Vec::new()))
    }

    /// Lists every workout option with the coaches offering it
    pub async fn list_options(&self) -> Result<Vec<WorkoutOption>, AppError> {
        let options = WorkoutRepository::new(self.db).get_all_options().await?;

        Ok(options
            .into_iter()
            .map(|(option, mappings)| WorkoutOption::from_entity(option, mappings))
            .collect())
    }

    /// Adds a workout option to a coach's specializations
    ///
    /// # Returns
    /// - `Ok(Workout)` - The new mapping
    /// - `Err(AppError::BadRequest)` - Invalid coach id
    /// - `Err(AppError::NotFound)` - Unknown workout option
    /// - `Err(AppError::Conflict)` - The coach already offers the option
    pub async fn add_specialization(
        &self,
        coach_id: &str,
        workout_option_id: i32,
    ) -> Result<Workout, AppError> {
        validate_actor_id("coach_id", coach_id)?;

        let repo = WorkoutRepository::new(self.db);

        let Some(option) = repo.get_option_by_id(workout_option_id).await? else {
            return Err(AppError::NotFound(format!(
                "Workout option {} not found",
                workout_option_id
            )));
        };

        let mapping = repo
            .create_mapping(coach_id, workout_option_id)
            .await
            .map_err(|e| {
                conflict_on_unique(
                    e,
                    format!("Coach {} already offers {}", coach_id, option.name),
                )
            })?;

        tracing::info!("Coach {} now offers {}", coach_id, option.name);

        Ok(Workout::from_entity(mapping, Some(option)))
    }

    /// Removes a workout option from a coach's specializations
    ///
    /// # Returns
    /// - `Ok(())` - The mapping was deleted
    /// - `Err(AppError::NotFound)` - The coach does not offer the option
    /// - `Err(AppError::Conflict)` - Existing bookings reference the mapping
    pub async fn remove_specialization(
        &self,
        coach_id: &str,
        workout_option_id: i32,
    ) -> Result<(), AppError> {
        validate_actor_id("coach_id", coach_id)?;

        let repo = WorkoutRepository::new(self.db);

        let Some(mapping) = repo.find_mapping(coach_id, workout_option_id).await? else {
            return Err(AppError::NotFound(format!(
                "Coach {} does not offer workout option {}",
                coach_id, workout_option_id
            )));
        };

        if BookingRepository::new(self.db)
            .count_for_workout(mapping.id)
            .await?
            > 0
        {
            return Err(AppError::Conflict(WORKOUT_HAS_BOOKINGS.to_string()));
        }

        repo.delete_mapping(mapping).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::Conflict(WORKOUT_HAS_BOOKINGS.to_string())
            } else {
                e.into()
            }
        })?;

        tracing::info!(
            "Coach {} no longer offers workout option {}",
            coach_id,
            workout_option_id
        );

        Ok(())
    }

    /// Gets the workouts a coach offers
    pub async fn get_coach_workouts(&self, coach_id: &str) -> Result<Vec<Workout>, AppError> {
        validate_actor_id("coach_id", coach_id)?;

        let mappings = WorkoutRepository::new(self.db)
            .get_mappings(Some(coach_id), None)
            .await?;

        Ok(mappings
            .into_iter()
            .map(|(mapping, option)| Workout::from_entity(mapping, option))
            .collect())
    }
}

/// SQLite reports `ON DELETE RESTRICT` as a trigger constraint (extended code 1811), which
/// `sql_err` does not classify.
fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ) || err.to_string().contains("FOREIGN KEY constraint failed")
}

fn conflict_on_unique(err: DbErr, message: String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message),
        _ => err.into(),
    }
}
