use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct FeedbackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeedbackRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an empty ledger for one direction of a booking
    pub async fn create(
        &self,
        booking_id: i32,
        from_id: &str,
        to_id: &str,
    ) -> Result<entity::feedback::Model, DbErr> {
        entity::feedback::ActiveModel {
            booking_id: ActiveValue::Set(booking_id),
            from_id: ActiveValue::Set(from_id.to_string()),
            to_id: ActiveValue::Set(to_id.to_string()),
            last_entry_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Returns the ledger for (booking, from), creating it if it does not exist.
    ///
    /// The insert ignores conflicts on the (booking_id, from_id) unique index, so two
    /// concurrent callers end up reading the same ledger.
    ///
    /// # Arguments
    /// - `booking_id` - Booking the ledger belongs to
    /// - `from_id` - Author of the feedback
    /// - `to_id` - Recipient of the feedback
    ///
    /// # Returns
    /// - `Ok(Model)` - The existing or newly created ledger
    /// - `Err(DbErr)` - Database error
    pub async fn get_or_create(
        &self,
        booking_id: i32,
        from_id: &str,
        to_id: &str,
    ) -> Result<entity::feedback::Model, DbErr> {
        let ledger = entity::feedback::ActiveModel {
            booking_id: ActiveValue::Set(booking_id),
            from_id: ActiveValue::Set(from_id.to_string()),
            to_id: ActiveValue::Set(to_id.to_string()),
            last_entry_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        entity::prelude::Feedback::insert(ledger)
            .on_conflict(
                OnConflict::columns([
                    entity::feedback::Column::BookingId,
                    entity::feedback::Column::FromId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.find_by_booking_and_from(booking_id, from_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Feedback for booking {} from {} not found after upsert",
                booking_id, from_id
            )))
    }

    /// Finds the ledger written by `from_id` for a booking
    pub async fn find_by_booking_and_from(
        &self,
        booking_id: i32,
        from_id: &str,
    ) -> Result<Option<entity::feedback::Model>, DbErr> {
        entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::BookingId.eq(booking_id))
            .filter(entity::feedback::Column::FromId.eq(from_id))
            .one(self.db)
            .await
    }

    /// Appends an entry to a ledger and stamps the ledger's latest-entry time
    pub async fn append_entry(
        &self,
        feedback_id: i32,
        message: &str,
        rating: Option<i32>,
        created_at: DateTime<Utc>,
    ) -> Result<entity::feedback_entry::Model, DbErr> {
        let entry = entity::feedback_entry::ActiveModel {
            feedback_id: ActiveValue::Set(feedback_id),
            message: ActiveValue::Set(message.to_string()),
            rating: ActiveValue::Set(rating),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::prelude::Feedback::update_many()
            .col_expr(
                entity::feedback::Column::LastEntryAt,
                Expr::value(Some(created_at)),
            )
            .filter(entity::feedback::Column::Id.eq(feedback_id))
            .exec(self.db)
            .await?;

        Ok(entry)
    }

    /// Gets the entries of the given ledgers, oldest first
    pub async fn get_entries(
        &self,
        feedback_ids: Vec<i32>,
    ) -> Result<Vec<entity::feedback_entry::Model>, DbErr> {
        if feedback_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FeedbackEntry::find()
            .filter(entity::feedback_entry::Column::FeedbackId.is_in(feedback_ids))
            .order_by_asc(entity::feedback_entry::Column::CreatedAt)
            .order_by_asc(entity::feedback_entry::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets non-empty ledgers addressed to a recipient, most recent entry first
    ///
    /// # Arguments
    /// - `to_id` - Recipient of the feedback
    /// - `page` - Zero-based page number
    /// - `per_page` - Number of ledgers per page
    ///
    /// # Returns
    /// - `Ok((ledgers, total))` - The page and the total number of non-empty ledgers
    /// - `Err(DbErr)` - Database error
    pub async fn get_received_paginated(
        &self,
        to_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::feedback::Model>, u64), DbErr> {
        let paginator = entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::ToId.eq(to_id))
            .filter(entity::feedback::Column::LastEntryAt.is_not_null())
            .order_by_desc(entity::feedback::Column::LastEntryAt)
            .order_by_desc(entity::feedback::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let ledgers = paginator.fetch_page(page).await?;

        Ok((ledgers, total))
    }

    /// Gets every non-empty ledger addressed to a recipient
    pub async fn get_received(&self, to_id: &str) -> Result<Vec<entity::feedback::Model>, DbErr> {
        entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::ToId.eq(to_id))
            .filter(entity::feedback::Column::LastEntryAt.is_not_null())
            .all(self.db)
            .await
    }
}
