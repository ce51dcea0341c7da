//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates everything a coach needs to be bookable.
///
/// This is a convenience method that creates:
/// 1. Time slot (09:00-10:00)
/// 2. Workout option
/// 3. Workout mapping of the option to `coach_id`
///
/// # Arguments
/// - `db` - Database connection
/// - `coach_id` - Directory id of the coach offering the workout
///
/// # Returns
/// - `Ok((time_slot, workout_option, workout))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
    coach_id: &str,
) -> Result<
    (
        entity::time_slot::Model,
        entity::workout_option::Model,
        entity::workout::Model,
    ),
    DbErr,
> {
    let time_slot = crate::factory::time_slot::create_time_slot(db, "09:00", "10:00").await?;
    let option = crate::factory::workout_option::create_workout_option(db).await?;
    let workout = crate::factory::workout::create_workout(db, option.id, coach_id).await?;

    Ok((time_slot, option, workout))
}

/// Creates a scheduled booking for tomorrow along with all of its dependencies.
///
/// # Arguments
/// - `db` - Database connection
/// - `coach_id` - Directory id of the coach
/// - `client_id` - Directory id of the client
///
/// # Returns
/// - `Ok((time_slot, workout_option, workout, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
    coach_id: &str,
    client_id: &str,
) -> Result<
    (
        entity::time_slot::Model,
        entity::workout_option::Model,
        entity::workout::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (time_slot, option, workout) = create_booking_dependencies(db, coach_id).await?;
    let booking =
        crate::factory::booking::create_booking(db, time_slot.id, workout.id, coach_id, client_id)
            .await?;

    Ok((time_slot, option, workout, booking))
}
