//! Time slot factory for creating catalog entries in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a time slot with the given wall-clock bounds.
///
/// # Arguments
/// - `db` - Database connection
/// - `start_time` - Start of the slot as `HH:MM`
/// - `end_time` - End of the slot as `HH:MM`
///
/// # Returns
/// - `Ok(entity::time_slot::Model)` - Created time slot
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let slot = create_time_slot(&db, "09:00", "10:00").await?;
/// ```
pub async fn create_time_slot(
    db: &DatabaseConnection,
    start_time: impl Into<String>,
    end_time: impl Into<String>,
) -> Result<entity::time_slot::Model, DbErr> {
    entity::time_slot::ActiveModel {
        id: ActiveValue::NotSet,
        start_time: ActiveValue::Set(start_time.into()),
        end_time: ActiveValue::Set(end_time.into()),
    }
    .insert(db)
    .await
}
