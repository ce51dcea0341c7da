//! Workout option factory for creating taxonomy entries in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a workout option with a unique generated name (`"Workout {id}"`).
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::workout_option::Model)` - Created workout option
/// - `Err(DbErr)` - Database error during insert
pub async fn create_workout_option(
    db: &DatabaseConnection,
) -> Result<entity::workout_option::Model, DbErr> {
    create_workout_option_named(db, format!("Workout {}", next_id())).await
}

/// Creates a workout option with a specific name.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Name of the workout option, must be unique
///
/// # Returns
/// - `Ok(entity::workout_option::Model)` - Created workout option
/// - `Err(DbErr)` - Database error during insert
pub async fn create_workout_option_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::workout_option::Model, DbErr> {
    entity::workout_option::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}
