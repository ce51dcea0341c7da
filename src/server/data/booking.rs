use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::{Condition, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::booking::{BookingState, NewBooking};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new scheduled booking.
    ///
    /// Fills both live slot keys, so a second live booking for the same coach or client at
    /// the same slot and date fails with a unique constraint violation.
    ///
    /// # Arguments
    /// - `booking` - Validated booking values
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted booking
    /// - `Err(DbErr)` - Insert failed, including unique slot key violations
    pub async fn create(&self, booking: NewBooking) -> Result<entity::booking::Model, DbErr> {
        let coach_slot_key =
            entity::booking::slot_key(&booking.coach_id, booking.time_slot_id, booking.date);
        let client_slot_key =
            entity::booking::slot_key(&booking.client_id, booking.time_slot_id, booking.date);

        entity::booking::ActiveModel {
            time_slot_id: ActiveValue::Set(booking.time_slot_id),
            coach_id: ActiveValue::Set(booking.coach_id),
            client_id: ActiveValue::Set(booking.client_id),
            workout_id: ActiveValue::Set(booking.workout_id),
            date: ActiveValue::Set(booking.date),
            state: ActiveValue::Set(BookingState::Scheduled.as_str().to_string()),
            coach_slot_key: ActiveValue::Set(Some(coach_slot_key)),
            client_slot_key: ActiveValue::Set(Some(client_slot_key)),
            client_feedback_id: ActiveValue::Set(None),
            coach_feedback_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Links the two feedback ledgers to a booking
    pub async fn set_feedback_ids(
        &self,
        booking: entity::booking::Model,
        client_feedback_id: i32,
        coach_feedback_id: i32,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active: entity::booking::ActiveModel = booking.into();
        active.client_feedback_id = ActiveValue::Set(Some(client_feedback_id));
        active.coach_feedback_id = ActiveValue::Set(Some(coach_feedback_id));

        active.update(self.db).await
    }

    /// Gets a booking by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Gets a booking by ID together with its time slot
    pub async fn get_by_id_with_slot(
        &self,
        id: i32,
    ) -> Result<Option<(entity::booking::Model, Option<entity::time_slot::Model>)>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::TimeSlot)
            .one(self.db)
            .await
    }

    /// Finds the live booking holding a coach's slot on a date
    pub async fn find_live_for_coach(
        &self,
        coach_id: &str,
        time_slot_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(
                entity::booking::Column::CoachSlotKey.eq(entity::booking::slot_key(
                    coach_id,
                    time_slot_id,
                    date,
                )),
            )
            .one(self.db)
            .await
    }

    /// Finds the live booking holding a client's slot on a date
    pub async fn find_live_for_client(
        &self,
        client_id: &str,
        time_slot_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(
                entity::booking::Column::ClientSlotKey.eq(entity::booking::slot_key(
                    client_id,
                    time_slot_id,
                    date,
                )),
            )
            .one(self.db)
            .await
    }

    /// Counts bookings in any state that reference a workout mapping
    pub async fn count_for_workout(&self, workout_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::WorkoutId.eq(workout_id))
            .count(self.db)
            .await
    }

    /// Gets non-cancelled bookings of the given coaches on a date
    pub async fn get_live_for_coaches_on_date(
        &self,
        coach_ids: Vec<String>,
        date: NaiveDate,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        if coach_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CoachId.is_in(coach_ids))
            .filter(entity::booking::Column::Date.eq(date))
            .filter(entity::booking::Column::State.ne(BookingState::Cancelled.as_str()))
            .all(self.db)
            .await
    }

    /// Gets every booking where the actor is coach or client, with time slots
    ///
    /// Results are ordered by date; callers order same-day bookings by slot start.
    pub async fn get_for_actor(
        &self,
        actor_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<(entity::booking::Model, Option<entity::time_slot::Model>)>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(
                Condition::any()
                    .add(entity::booking::Column::CoachId.eq(actor_id))
                    .add(entity::booking::Column::ClientId.eq(actor_id)),
            )
            .find_also_related(entity::prelude::TimeSlot);

        if let Some(date) = date {
            query = query.filter(entity::booking::Column::Date.eq(date));
        }

        query
            .order_by_asc(entity::booking::Column::Date)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets scheduled bookings dated on or before `date`, with time slots
    pub async fn get_scheduled_until(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<(entity::booking::Model, Option<entity::time_slot::Model>)>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::State.eq(BookingState::Scheduled.as_str()))
            .filter(entity::booking::Column::Date.lte(date))
            .find_also_related(entity::prelude::TimeSlot)
            .order_by_asc(entity::booking::Column::Date)
            .all(self.db)
            .await
    }

    /// Moves a booking from `from` to `to` if it is still in `from`.
    ///
    /// Transitions to `Cancelled` also clear both live slot keys, releasing the slot.
    ///
    /// # Returns
    /// - `Ok(1)` - The booking was transitioned
    /// - `Ok(0)` - The booking no longer exists or its state changed since it was read
    /// - `Err(DbErr)` - Database error
    pub async fn transition_state(
        &self,
        id: i32,
        from: BookingState,
        to: BookingState,
    ) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::State, Expr::value(to.as_str()))
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::State.eq(from.as_str()));

        if to == BookingState::Cancelled {
            update = update
                .col_expr(
                    entity::booking::Column::CoachSlotKey,
                    Expr::value(Option::<String>::None),
                )
                .col_expr(
                    entity::booking::Column::ClientSlotKey,
                    Expr::value(Option::<String>::None),
                );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
