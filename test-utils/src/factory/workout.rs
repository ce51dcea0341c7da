//! Workout mapping factory linking a coach to a workout option.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a workout mapping for the given option and coach.
///
/// # Arguments
/// - `db` - Database connection
/// - `workout_option_id` - Workout option the coach offers
/// - `coach_id` - Directory id of the coach
///
/// # Returns
/// - `Ok(entity::workout::Model)` - Created workout mapping
/// - `Err(DbErr)` - Database error during insert
pub async fn create_workout(
    db: &DatabaseConnection,
    workout_option_id: i32,
    coach_id: impl Into<String>,
) -> Result<entity::workout::Model, DbErr> {
    entity::workout::ActiveModel {
        id: ActiveValue::NotSet,
        workout_option_id: ActiveValue::Set(workout_option_id),
        coach_id: ActiveValue::Set(coach_id.into()),
    }
    .insert(db)
    .await
}
