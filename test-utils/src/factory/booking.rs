//! Booking factory for creating test booking entities.
//!
//! This module provides factory methods for creating booking entities with
//! sensible defaults. The factory keeps the live slot keys consistent with the
//! booking state so uniqueness checks behave as they do in production.

use chrono::{Duration, Local, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, slot.id, workout.id, "coach_1", "client_1")
///     .date(Local::now().date_naive() - Duration::days(1))
///     .state("waiting_for_feedback")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    time_slot_id: i32,
    workout_id: i32,
    coach_id: String,
    client_id: String,
    date: NaiveDate,
    state: String,
    client_feedback_id: Option<i32>,
    coach_feedback_id: Option<i32>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - date: tomorrow (local)
    /// - state: `"scheduled"`
    /// - feedback ledger references: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `time_slot_id` - Time slot of the booking
    /// - `workout_id` - Workout mapping being booked
    /// - `coach_id` - Directory id of the coach
    /// - `client_id` - Directory id of the client
    ///
    /// # Returns
    /// - `BookingFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        time_slot_id: i32,
        workout_id: i32,
        coach_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            time_slot_id,
            workout_id,
            coach_id: coach_id.into(),
            client_id: client_id.into(),
            date: Local::now().date_naive() + Duration::days(1),
            state: "scheduled".to_string(),
            client_feedback_id: None,
            coach_feedback_id: None,
        }
    }

    /// Sets the booking date.
    ///
    /// # Arguments
    /// - `date` - Calendar date of the booking
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the booking state.
    ///
    /// A `"cancelled"` booking is stored without slot keys.
    ///
    /// # Arguments
    /// - `state` - Stored state value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the ledger references of the booking.
    ///
    /// # Arguments
    /// - `client_feedback_id` - Ledger written by the client
    /// - `coach_feedback_id` - Ledger written by the coach
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn feedback_ids(
        mut self,
        client_feedback_id: Option<i32>,
        coach_feedback_id: Option<i32>,
    ) -> Self {
        self.client_feedback_id = client_feedback_id;
        self.coach_feedback_id = coach_feedback_id;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let live = self.state != "cancelled";
        let coach_slot_key = live
            .then(|| entity::booking::slot_key(&self.coach_id, self.time_slot_id, self.date));
        let client_slot_key = live
            .then(|| entity::booking::slot_key(&self.client_id, self.time_slot_id, self.date));

        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            time_slot_id: ActiveValue::Set(self.time_slot_id),
            coach_id: ActiveValue::Set(self.coach_id),
            client_id: ActiveValue::Set(self.client_id),
            workout_id: ActiveValue::Set(self.workout_id),
            date: ActiveValue::Set(self.date),
            state: ActiveValue::Set(self.state),
            coach_slot_key: ActiveValue::Set(coach_slot_key),
            client_slot_key: ActiveValue::Set(client_slot_key),
            client_feedback_id: ActiveValue::Set(self.client_feedback_id),
            coach_feedback_id: ActiveValue::Set(self.coach_feedback_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled booking for tomorrow.
///
/// Shorthand for `BookingFactory::new(db, time_slot_id, workout_id, coach_id, client_id).build().await`.
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking(
    db: &DatabaseConnection,
    time_slot_id: i32,
    workout_id: i32,
    coach_id: impl Into<String>,
    client_id: impl Into<String>,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, time_slot_id, workout_id, coach_id, client_id)
        .build()
        .await
}
