//! Feedback factory for creating ledgers and ledger entries in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty feedback ledger for a booking.
///
/// # Arguments
/// - `db` - Database connection
/// - `booking_id` - Booking the ledger belongs to
/// - `from_id` - Directory id of the author
/// - `to_id` - Directory id of the recipient
///
/// # Returns
/// - `Ok(entity::feedback::Model)` - Created ledger
/// - `Err(DbErr)` - Database error during insert
pub async fn create_feedback(
    db: &DatabaseConnection,
    booking_id: i32,
    from_id: impl Into<String>,
    to_id: impl Into<String>,
) -> Result<entity::feedback::Model, DbErr> {
    entity::feedback::ActiveModel {
        id: ActiveValue::NotSet,
        booking_id: ActiveValue::Set(booking_id),
        from_id: ActiveValue::Set(from_id.into()),
        to_id: ActiveValue::Set(to_id.into()),
        last_entry_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Appends an entry to a ledger and stamps the ledger's latest-entry time.
///
/// # Arguments
/// - `db` - Database connection
/// - `feedback` - Ledger to append to
/// - `message` - Feedback text
/// - `rating` - Optional 1-5 rating
/// - `created_at` - Timestamp of the entry
///
/// # Returns
/// - `Ok(entity::feedback_entry::Model)` - Created entry
/// - `Err(DbErr)` - Database error during insert or update
pub async fn create_feedback_entry(
    db: &DatabaseConnection,
    feedback: &entity::feedback::Model,
    message: impl Into<String>,
    rating: Option<i32>,
    created_at: chrono::DateTime<Utc>,
) -> Result<entity::feedback_entry::Model, DbErr> {
    let entry = entity::feedback_entry::ActiveModel {
        id: ActiveValue::NotSet,
        feedback_id: ActiveValue::Set(feedback.id),
        message: ActiveValue::Set(message.into()),
        rating: ActiveValue::Set(rating),
        created_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await?;

    let mut ledger: entity::feedback::ActiveModel = feedback.clone().into();
    ledger.last_entry_at = ActiveValue::Set(Some(created_at));
    ledger.update(db).await?;

    Ok(entry)
}
