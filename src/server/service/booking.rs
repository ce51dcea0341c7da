//! Booking orchestration and cancellation.
//!
//! `book` validates a request against the directory, the workout mappings and the slot
//! catalog, then writes the booking and both feedback ledgers in one transaction. The unique
//! live slot keys on the booking table are the source of truth for double-booking; the
//! lookups before the transaction only produce a friendlier error sooner.

use chrono::{DateTime, Local, NaiveDateTime};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository, feedback::FeedbackRepository,
        time_slot::TimeSlotRepository, workout::WorkoutRepository,
    },
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        actor::Actor,
        booking::{Booking, BookingState, BookingWithSlot, CreateBookingParams, NewBooking},
        time_slot::TimeSlot,
    },
    service::directory::UserDirectory,
    util::{
        date::{parse_booking_date, parse_date_input, DateInput},
        parse::validate_actor_id,
    },
};

/// Minimum whole hours between now and the session start for a cancellation.
pub const CANCELLATION_LEAD_HOURS: i64 = 12;

pub const COACH_ALREADY_BOOKED: &str = "Coach is already booked for this time slot";
pub const CLIENT_ALREADY_BOOKED: &str = "You already have a booking for this time slot";
pub const CONCURRENT_MODIFICATION: &str = "Booking was modified concurrently, please retry";

/// Maps a unique slot key violation to the matching double-booking conflict.
///
/// Any other database error is passed through unchanged.
fn map_slot_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            if message.contains("client_slot_key") {
                AppError::Conflict(CLIENT_ALREADY_BOOKED.to_string())
            } else {
                AppError::Conflict(COACH_ALREADY_BOOKED.to_string())
            }
        }
        _ => err.into(),
    }
}

/// Loads a booking with its time slot.
pub(super) async fn load_booking<C: ConnectionTrait>(
    db: &C,
    booking_id: i32,
) -> Result<BookingWithSlot, AppError> {
    let Some((booking, time_slot)) = BookingRepository::new(db)
        .get_by_id_with_slot(booking_id)
        .await?
    else {
        return Err(AppError::NotFound(format!(
            "Booking {} not found",
            booking_id
        )));
    };

    let Some(time_slot) = time_slot else {
        return Err(AppError::InternalError(format!(
            "Booking {} references missing time slot {}",
            booking.id, booking.time_slot_id
        )));
    };

    Ok(BookingWithSlot {
        booking: Booking::from_entity(booking)?,
        time_slot: TimeSlot::from_entity(time_slot)?,
    })
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn UserDirectory,
    now: NaiveDateTime,
}

impl<'a> BookingService<'a> {
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

    /// Books a session for a client.
    ///
    /// Creates the booking in `scheduled` state together with the client → coach and
    /// coach → client feedback ledgers. Either everything is written or nothing is.
    ///
    /// # Arguments
    /// - `params` - Client, coach, workout, time slot and requested date
    ///
    /// # Returns
    /// - `Ok(BookingWithSlot)` - The new booking
    /// - `Err(AppError::BadRequest)` - Invalid ids, past or unparseable date, or self-booking
    /// - `Err(AppError::NotFound)` - Unknown coach, workout not offered by the coach, or unknown slot
    /// - `Err(BookingError::SlotAlreadyEnded)` - The slot has ended on the requested date
    /// - `Err(AppError::Conflict)` - The coach or the client already holds the slot
    pub async fn book(&self, params: CreateBookingParams) -> Result<BookingWithSlot, AppError> {
        validate_actor_id("client_id", &params.client_id)?;
        validate_actor_id("coach_id", &params.coach_id)?;

        if params.client_id == params.coach_id {
            return Err(AppError::BadRequest(
                "A coach cannot book a session with themselves".to_string(),
            ));
        }

        let date = parse_booking_date(params.date.as_ref(), self.now.date())?;

        if self.directory.get_coach(&params.coach_id).await.is_none() {
            return Err(AppError::NotFound(format!(
                "Coach {} not found",
                params.coach_id
            )));
        }

        match WorkoutRepository::new(self.db)
            .get_by_id(params.workout_id)
            .await?
        {
            Some((workout, _)) if workout.coach_id == params.coach_id => {}
            _ => {
                return Err(AppError::NotFound(format!(
                    "Workout {} is not offered by coach {}",
                    params.workout_id, params.coach_id
                )))
            }
        }

        let time_slot = TimeSlotRepository::new(self.db)
            .get_by_id(params.time_slot_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Time slot {} not found", params.time_slot_id))
            })?;
        let time_slot = TimeSlot::from_entity(time_slot)?;

        if time_slot.ends_at(date) <= self.now {
            return Err(BookingError::SlotAlreadyEnded.into());
        }

        let booking_repo = BookingRepository::new(self.db);

        if booking_repo
            .find_live_for_coach(&params.coach_id, time_slot.id, date)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(COACH_ALREADY_BOOKED.to_string()));
        }

        if booking_repo
            .find_live_for_client(&params.client_id, time_slot.id, date)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(CLIENT_ALREADY_BOOKED.to_string()));
        }

        let txn = self.db.begin().await?;

        let booking = BookingRepository::new(&txn)
            .create(NewBooking {
                time_slot_id: time_slot.id,
                coach_id: params.coach_id.clone(),
                client_id: params.client_id.clone(),
                workout_id: params.workout_id,
                date,
            })
            .await
            .map_err(map_slot_conflict)?;

        let feedback_repo = FeedbackRepository::new(&txn);
        let client_ledger = feedback_repo
            .create(booking.id, &params.client_id, &params.coach_id)
            .await?;
        let coach_ledger = feedback_repo
            .create(booking.id, &params.coach_id, &params.client_id)
            .await?;

        let booking = BookingRepository::new(&txn)
            .set_feedback_ids(booking, client_ledger.id, coach_ledger.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Booked coach {} for client {} at slot {} on {} (booking {})",
            booking.coach_id,
            booking.client_id,
            booking.time_slot_id,
            booking.date,
            booking.id
        );

        Ok(BookingWithSlot {
            booking: Booking::from_entity(booking)?,
            time_slot,
        })
    }

    /// Cancels a scheduled booking.
    ///
    /// Only the booking's client or coach may cancel, and only while the booking is
    /// `scheduled` and at least `CANCELLATION_LEAD_HOURS` whole hours before it starts.
    /// Cancelling releases the slot for both parties.
    ///
    /// # Arguments
    /// - `booking_id` - Booking to cancel
    /// - `actor` - Caller
    ///
    /// # Returns
    /// - `Ok(BookingWithSlot)` - The cancelled booking
    /// - `Err(AppError::NotFound)` - No such booking
    /// - `Err(AuthError::AccessDenied)` - Caller is not a party to the booking
    /// - `Err(BookingError)` - Not scheduled, or too close to the start
    /// - `Err(AppError::Conflict)` - The booking changed state concurrently
    pub async fn cancel(&self, booking_id: i32, actor: &Actor) -> Result<BookingWithSlot, AppError> {
        let BookingWithSlot { booking, time_slot } = load_booking(self.db, booking_id).await?;

        if booking.party_of(&actor.id).is_none() {
            return Err(AuthError::AccessDenied(
                actor.id.clone(),
                format!("not a party to booking {}", booking.id),
            )
            .into());
        }

        if booking.state != BookingState::Scheduled {
            return Err(BookingError::NotCancellable(booking.state).into());
        }

        let lead_time = time_slot.starts_at(booking.date) - self.now;
        if lead_time.num_hours() < CANCELLATION_LEAD_HOURS {
            return Err(BookingError::CancellationWindowClosed {
                required_hours: CANCELLATION_LEAD_HOURS,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let updated = BookingRepository::new(&txn)
            .transition_state(booking.id, BookingState::Scheduled, BookingState::Cancelled)
            .await?;
        if updated == 0 {
            return Err(AppError::Conflict(CONCURRENT_MODIFICATION.to_string()));
        }

        let cancelled = load_booking(&txn, booking.id).await?;

        txn.commit().await?;

        tracing::info!("Booking {} cancelled by {}", booking.id, actor.id);

        Ok(cancelled)
    }

    /// Gets a booking visible to the caller.
    ///
    /// # Returns
    /// - `Ok(BookingWithSlot)` - The booking
    /// - `Err(AppError::NotFound)` - No such booking
    /// - `Err(AuthError::AccessDenied)` - Caller is not a party to the booking
    pub async fn get_booking(
        &self,
        booking_id: i32,
        actor: &Actor,
    ) -> Result<BookingWithSlot, AppError> {
        let booking = load_booking(self.db, booking_id).await?;

        if booking.booking.party_of(&actor.id).is_none() {
            return Err(AuthError::AccessDenied(
                actor.id.clone(),
                format!("not a party to booking {}", booking_id),
            )
            .into());
        }

        Ok(booking)
    }

    /// Gets the caller's bookings as coach or client, ordered by date then slot start.
    ///
    /// # Arguments
    /// - `actor` - Caller
    /// - `date` - Restricts the list to one date; past dates are allowed
    pub async fn get_bookings_for_actor(
        &self,
        actor: &Actor,
        date: Option<DateInput>,
    ) -> Result<Vec<BookingWithSlot>, AppError> {
        let date = match date {
            Some(date) => Some(parse_date_input(Some(&date), self.now.date())?),
            None => None,
        };

        let mut bookings = Vec::new();

        for (booking, time_slot) in BookingRepository::new(self.db)
            .get_for_actor(&actor.id, date)
            .await?
        {
            let Some(time_slot) = time_slot else {
                tracing::warn!(
                    "Skipping booking {} with missing time slot {}",
                    booking.id,
                    booking.time_slot_id
                );
                continue;
            };

            bookings.push(BookingWithSlot {
                booking: Booking::from_entity(booking)?,
                time_slot: TimeSlot::from_entity(time_slot)?,
            });
        }

        bookings.sort_by(|a, b| {
            (a.booking.date, a.time_slot.start_time, a.booking.id).cmp(&(
                b.booking.date,
                b.time_slot.start_time,
                b.booking.id,
            ))
        });

        Ok(bookings)
    }
}
