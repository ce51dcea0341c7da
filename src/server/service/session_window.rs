use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::booking::BookingRepository,
    error::AppError,
    model::{booking::BookingState, time_slot::TimeSlot},
};

pub struct SessionWindowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionWindowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Moves scheduled bookings whose session has ended into `waiting_for_feedback`.
    ///
    /// Each booking is transitioned only if it is still `scheduled`, so a concurrent
    /// cancellation or feedback submission wins. Bookings with unreadable slots are
    /// skipped and logged.
    ///
    /// # Arguments
    /// - `now` - Current local time
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings transitioned
    /// - `Err(AppError)` - Database error
    pub async fn open_feedback_windows(&self, now: NaiveDateTime) -> Result<u64, AppError> {
        let repo = BookingRepository::new(self.db);

        let candidates = repo.get_scheduled_until(now.date()).await?;

        let mut opened = 0;

        for (booking, time_slot) in candidates {
            let Some(time_slot) = time_slot else {
                tracing::warn!(
                    "Booking {} references missing time slot {}",
                    booking.id,
                    booking.time_slot_id
                );
                continue;
            };

            let time_slot = match TimeSlot::from_entity(time_slot) {
                Ok(slot) => slot,
                Err(e) => {
                    tracing::warn!("Skipping booking {}: {}", booking.id, e);
                    continue;
                }
            };

            if time_slot.ends_at(booking.date) > now {
                continue;
            }

            opened += repo
                .transition_state(
                    booking.id,
                    BookingState::Scheduled,
                    BookingState::WaitingForFeedback,
                )
                .await?;
        }

        if opened > 0 {
            tracing::info!("Opened feedback window for {} booking(s)", opened);
        }

        Ok(opened)
    }
}
