//! Feedback transitions and the coach feedback views.
//!
//! Submitting feedback appends to the author's ledger for the booking and completes the
//! booking, whether or not the other party has responded.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use futures::future::join_all;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::{HashMap, HashSet};

use crate::server::{
    data::{booking::BookingRepository, feedback::FeedbackRepository},
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        actor::Actor,
        booking::{BookingState, BookingWithSlot, Party},
        directory::UserProfile,
        feedback::{
            average_latest_rating, sort_page, CreateFeedbackParams, Feedback, FeedbackSort,
            FeedbackStats, FeedbackViewItem, PaginatedFeedback,
        },
    },
    service::{
        booking::{load_booking, CONCURRENT_MODIFICATION},
        directory::UserDirectory,
    },
    util::parse::validate_actor_id,
};

pub const MAX_PER_PAGE: u64 = 100;

/// Groups entries by ledger and builds domain ledgers in the given order.
fn assemble_ledgers(
    ledgers: Vec<entity::feedback::Model>,
    entries: Vec<entity::feedback_entry::Model>,
) -> Vec<Feedback> {
    let mut by_ledger: HashMap<i32, Vec<entity::feedback_entry::Model>> = HashMap::new();
    for entry in entries {
        by_ledger.entry(entry.feedback_id).or_default().push(entry);
    }

    ledgers
        .into_iter()
        .map(|ledger| {
            let entries = by_ledger.remove(&ledger.id).unwrap_or_default();
            Feedback::from_entity(ledger, entries)
        })
        .collect()
}

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn UserDirectory,
    now: NaiveDateTime,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection, directory: &'a dyn UserDirectory) -> Self {
        Self {
            db,
            directory,
            now: Local::now().naive_local(),
        }
    }

    /// Evaluates time-dependent rules as of `now` instead of the construction time
    pub fn at(mut self, now: DateTime<Local>) -> Self {
        self.now = now.naive_local();
        self
    }

    /// Appends feedback from a party of a booking and completes the booking.
    ///
    /// The direction follows the caller: the client writes to the client → coach ledger,
    /// the coach to the coach → client ledger. The ledger is created if it is missing.
    ///
    /// # Arguments
    /// - `actor` - Caller, must be the booking's client or coach
    /// - `params` - Booking id, message and optional 1-5 rating
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The caller's ledger with its full history
    /// - `Err(AppError::BadRequest)` - Empty message or rating outside 1-5
    /// - `Err(AppError::NotFound)` - No such booking
    /// - `Err(AuthError::AccessDenied)` - Caller is not a party to the booking
    /// - `Err(BookingError)` - Booking completed or cancelled, or the session has not ended
    /// - `Err(AppError::Conflict)` - The booking changed state concurrently
    pub async fn add_feedback(
        &self,
        actor: &Actor,
        params: CreateFeedbackParams,
    ) -> Result<Feedback, AppError> {
        let message = params.message.trim();
        if message.is_empty() {
            return Err(AppError::BadRequest(
                "Feedback message cannot be empty".to_string(),
            ));
        }

        if let Some(rating) = params.rating {
            if !(1..=5).contains(&rating) {
                return Err(AppError::BadRequest(
                    "Rating must be between 1 and 5".to_string(),
                ));
            }
        }

        let BookingWithSlot { booking, time_slot } =
            load_booking(self.db, params.booking_id).await?;

        let (from_id, to_id) = match booking.party_of(&actor.id) {
            Some(Party::Client) => (booking.client_id.clone(), booking.coach_id.clone()),
            Some(Party::Coach) => (booking.coach_id.clone(), booking.client_id.clone()),
            None => {
                return Err(AuthError::AccessDenied(
                    actor.id.clone(),
                    format!("not a party to booking {}", booking.id),
                )
                .into())
            }
        };

        if booking.state.is_terminal() {
            return Err(BookingError::FeedbackClosed(booking.state).into());
        }

        if time_slot.ends_at(booking.date) > self.now {
            return Err(BookingError::SessionNotFinished.into());
        }

        let txn = self.db.begin().await?;

        let feedback_repo = FeedbackRepository::new(&txn);
        let ledger = feedback_repo
            .get_or_create(booking.id, &from_id, &to_id)
            .await?;
        feedback_repo
            .append_entry(ledger.id, message, params.rating, Utc::now())
            .await?;

        let updated = BookingRepository::new(&txn)
            .transition_state(booking.id, booking.state, BookingState::Completed)
            .await?;
        if updated == 0 {
            return Err(AppError::Conflict(CONCURRENT_MODIFICATION.to_string()));
        }

        let ledger = feedback_repo
            .find_by_booking_and_from(booking.id, &from_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Feedback ledger {} disappeared during submission",
                    ledger.id
                ))
            })?;
        let entries = feedback_repo.get_entries(vec![ledger.id]).await?;

        txn.commit().await?;

        tracing::info!(
            "Feedback from {} recorded on booking {}, booking completed",
            from_id,
            booking.id
        );

        Ok(Feedback::from_entity(ledger, entries))
    }

    /// Gets a page of the non-empty ledgers addressed to a coach.
    ///
    /// Pages are cut by recency in the database; `sort` only reorders the fetched page.
    /// `average_rating` is the mean of the latest ratings on the page.
    ///
    /// # Arguments
    /// - `coach_id` - Recipient of the feedback
    /// - `page` - Zero-based page number
    /// - `per_page` - Ledgers per page, 1 to `MAX_PER_PAGE`
    /// - `sort` - Ordering applied to the page
    ///
    /// # Returns
    /// - `Ok(PaginatedFeedback)` - Page with counterpart profiles and pagination metadata
    /// - `Err(AppError::BadRequest)` - Invalid coach id, page size or page number
    pub async fn get_feedback_for_coach(
        &self,
        coach_id: &str,
        page: u64,
        per_page: u64,
        sort: FeedbackSort,
    ) -> Result<PaginatedFeedback, AppError> {
        validate_actor_id("coach_id", coach_id)?;

        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(AppError::BadRequest(format!(
                "Entries per page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        let within_range = page
            .checked_mul(per_page)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !within_range {
            return Err(AppError::BadRequest(format!("Page {} is out of range", page)));
        }

        let repo = FeedbackRepository::new(self.db);

        let (ledgers, total) = repo
            .get_received_paginated(coach_id, page, per_page)
            .await?;
        let entries = repo
            .get_entries(ledgers.iter().map(|l| l.id).collect())
            .await?;

        let ledgers = assemble_ledgers(ledgers, entries);
        let counterparts = self
            .resolve_counterparts(ledgers.iter().map(|l| l.from_id.clone()).collect())
            .await;

        let mut items: Vec<FeedbackViewItem> = ledgers
            .into_iter()
            .filter_map(|ledger| {
                let counterpart = counterparts.get(&ledger.from_id).cloned().flatten();
                FeedbackViewItem::from_feedback(ledger, counterpart)
            })
            .collect();

        sort_page(&mut items, sort);
        let average_rating = average_latest_rating(&items);

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedFeedback {
            feedback: items,
            average_rating,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Looks up each distinct author once, all lookups in flight together
    async fn resolve_counterparts(
        &self,
        user_ids: HashSet<String>,
    ) -> HashMap<String, Option<UserProfile>> {
        let lookups = user_ids.into_iter().map(|user_id| async move {
            let profile = self.directory.get_user(&user_id).await;
            (user_id, profile)
        });

        join_all(lookups).await.into_iter().collect()
    }

    /// Computes rating statistics over every non-empty ledger addressed to a coach
    pub async fn get_feedback_stats(&self, coach_id: &str) -> Result<FeedbackStats, AppError> {
        validate_actor_id("coach_id", coach_id)?;

        let repo = FeedbackRepository::new(self.db);

        let ledgers = repo.get_received(coach_id).await?;
        let entries = repo
            .get_entries(ledgers.iter().map(|l| l.id).collect())
            .await?;

        let latest_ratings: Vec<Option<i32>> = assemble_ledgers(ledgers, entries)
            .iter()
            .filter_map(|ledger| ledger.latest().map(|entry| entry.rating))
            .collect();

        Ok(FeedbackStats::from_latest_ratings(
            coach_id.to_string(),
            latest_ratings,
        ))
    }
}
