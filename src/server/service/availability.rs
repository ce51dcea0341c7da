//! Availability resolution.
//!
//! Combines the slot catalog, coach workout mappings, live bookings and the user directory
//! to answer "when is this coach free" and "which coaches can I book".

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;
use std::collections::{HashMap, HashSet};

use crate::server::{
    data::{booking::BookingRepository, workout::WorkoutRepository},
    error::{booking::BookingError, AppError},
    model::{
        availability::{AvailabilityQuery, AvailabilityRecord},
        directory::UserProfile,
        time_slot::{CoachSchedule, ScheduleSlot, TimeSlot},
        workout::Workout,
    },
    service::{directory::UserDirectory, time_slot::TimeSlotService},
    util::{
        date::{parse_booking_date, DateInput},
        parse::validate_actor_id,
    },
};

/// Restricts the catalog to slots that can still be searched on `date`.
///
/// On the current date, slots whose start time has already passed are dropped.
///
/// # Arguments
/// - `slots` - Full slot catalog ordered by start time
/// - `date` - Date being searched
/// - `now` - Current local time
///
/// # Returns
/// - `Ok(Vec<TimeSlot>)` - Remaining slots in catalog order
/// - `Err(AppError::NotFound)` - The catalog is empty
/// - `Err(BookingError::NoSlotsRemaining)` - Every slot on the current date has started
pub fn searchable_slots(
    slots: Vec<TimeSlot>,
    date: NaiveDate,
    now: NaiveDateTime,
) -> Result<Vec<TimeSlot>, AppError> {
    if slots.is_empty() {
        return Err(AppError::NotFound(
            "No time slots are configured".to_string(),
        ));
    }

    let remaining: Vec<TimeSlot> = if date == now.date() {
        slots
            .into_iter()
            .filter(|slot| slot.starts_at(date) >= now)
            .collect()
    } else {
        slots
    };

    if remaining.is_empty() {
        return Err(BookingError::NoSlotsRemaining.into());
    }

    Ok(remaining)
}

/// Picks the slot to offer from a coach's free slots.
///
/// With a requested slot, returns it only if it is free, with every other free slot as
/// alternatives. Without one, returns the earliest free slot and the rest as alternatives.
pub fn pick_slot(
    free: Vec<TimeSlot>,
    requested: Option<i32>,
) -> Option<(TimeSlot, Vec<TimeSlot>)> {
    match requested {
        Some(id) => {
            let position = free.iter().position(|slot| slot.id == id)?;
            let mut alternatives = free;
            let chosen = alternatives.remove(position);

            Some((chosen, alternatives))
        }
        None => {
            let mut slots = free.into_iter();
            let chosen = slots.next()?;

            Some((chosen, slots.collect()))
        }
    }
}

fn ensure_slot_searchable(slots: &[TimeSlot], time_slot_id: i32) -> Result<(), AppError> {
    if !slots.iter().any(|slot| slot.id == time_slot_id) {
        return Err(BookingError::SlotUnavailable.into());
    }

    Ok(())
}

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn UserDirectory,
    now: NaiveDateTime,
}

impl<'a> AvailabilityService<'a> {
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

    /// Loads the slots that can still be searched on a date
    async fn load_searchable_slots(&self, date: NaiveDate) -> Result<Vec<TimeSlot>, AppError> {
        let slots = TimeSlotService::new(self.db).get_all().await?;

        searchable_slots(slots, date, self.now)
    }

    /// Gets a coach's slots for a date with a booked flag per slot.
    ///
    /// # Arguments
    /// - `coach_id` - Coach whose schedule to build
    /// - `date` - Requested date, today when `None`
    /// - `time_slot_id` - Restricts the schedule to one slot
    ///
    /// # Returns
    /// - `Ok(CoachSchedule)` - Slots in catalog order
    /// - `Err(AppError::BadRequest)` - Invalid coach id or date
    /// - `Err(AppError::NotFound)` - The slot catalog is empty
    /// - `Err(BookingError)` - No slots remain today, or the requested slot is not searchable
    pub async fn coach_schedule(
        &self,
        coach_id: &str,
        date: Option<DateInput>,
        time_slot_id: Option<i32>,
    ) -> Result<CoachSchedule, AppError> {
        validate_actor_id("coach_id", coach_id)?;
        let date = parse_booking_date(date.as_ref(), self.now.date())?;

        let mut slots = self.load_searchable_slots(date).await?;

        if let Some(time_slot_id) = time_slot_id {
            ensure_slot_searchable(&slots, time_slot_id)?;
            slots.retain(|slot| slot.id == time_slot_id);
        }

        let booked: HashSet<i32> = BookingRepository::new(self.db)
            .get_live_for_coaches_on_date(vec![coach_id.to_string()], date)
            .await?
            .into_iter()
            .map(|b| b.time_slot_id)
            .collect();

        Ok(CoachSchedule {
            coach_id: coach_id.to_string(),
            date,
            slots: slots
                .into_iter()
                .map(|slot| ScheduleSlot {
                    booked: booked.contains(&slot.id),
                    time_slot: slot,
                })
                .collect(),
        })
    }

    /// Finds coaches that can be booked for a workout on a date.
    ///
    /// Every coach workout mapping matching the coach/option filters yields at most one
    /// record. Coaches the directory cannot resolve are left out.
    ///
    /// # Arguments
    /// - `query` - Optional coach, workout option, time slot and date filters
    ///
    /// # Returns
    /// - `Ok(Vec<AvailabilityRecord>)` - Records in mapping order, possibly empty
    /// - `Err(AppError::BadRequest)` - Invalid coach id or date
    /// - `Err(AppError::NotFound)` - The slot catalog is empty
    /// - `Err(BookingError)` - No slots remain today, or the requested slot is not searchable
    pub async fn resolve_availability(
        &self,
        query: AvailabilityQuery,
    ) -> Result<Vec<AvailabilityRecord>, AppError> {
        if let Some(coach_id) = &query.coach_id {
            validate_actor_id("coach_id", coach_id)?;
        }
        let date = parse_booking_date(query.date.as_ref(), self.now.date())?;

        let slots = self.load_searchable_slots(date).await?;
        if let Some(time_slot_id) = query.time_slot_id {
            ensure_slot_searchable(&slots, time_slot_id)?;
        }

        let mappings: Vec<Workout> = WorkoutRepository::new(self.db)
            .get_mappings(query.coach_id.as_deref(), query.workout_option_id)
            .await?
            .into_iter()
            .map(|(mapping, option)| Workout::from_entity(mapping, option))
            .collect();

        if mappings.is_empty() {
            return Ok(Vec::new());
        }

        let coaches = self.resolve_coaches(query.coach_id.as_deref()).await;

        let coach_ids: Vec<String> = mappings
            .iter()
            .map(|m| m.coach_id.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let booked: HashSet<(String, i32)> = BookingRepository::new(self.db)
            .get_live_for_coaches_on_date(coach_ids, date)
            .await?
            .into_iter()
            .map(|b| (b.coach_id, b.time_slot_id))
            .collect();

        let mut records = Vec::new();

        for workout in mappings {
            let Some(coach) = coaches.get(&workout.coach_id) else {
                continue;
            };

            let free: Vec<TimeSlot> = slots
                .iter()
                .filter(|slot| !booked.contains(&(workout.coach_id.clone(), slot.id)))
                .cloned()
                .collect();

            if let Some((time_slot, alternative_slots)) = pick_slot(free, query.time_slot_id) {
                records.push(AvailabilityRecord {
                    coach: coach.clone(),
                    workout,
                    date,
                    time_slot,
                    alternative_slots,
                });
            }
        }

        Ok(records)
    }

    /// Resolves coach profiles, keyed by id
    async fn resolve_coaches(&self, coach_id: Option<&str>) -> HashMap<String, UserProfile> {
        let coaches: Vec<UserProfile> = match coach_id {
            Some(coach_id) => self.directory.get_coach(coach_id).await.into_iter().collect(),
            None => self.directory.get_all_coaches().await,
        };

        coaches
            .into_iter()
            .map(|coach| (coach.id.clone(), coach))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn slot(id: i32, hour: u32) -> TimeSlot {
        TimeSlot {
            id,
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 10).unwrap()
    }

    #[test]
    fn keeps_every_slot_on_future_dates() {
        let now = date().and_hms_opt(18, 0, 0).unwrap();
        let tomorrow = date().succ_opt().unwrap();

        let slots = searchable_slots(vec![slot(1, 9), slot(2, 10)], tomorrow, now).unwrap();

        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn drops_started_slots_today() {
        let now = date().and_hms_opt(9, 30, 0).unwrap();

        let slots =
            searchable_slots(vec![slot(1, 9), slot(2, 10), slot(3, 11)], date(), now).unwrap();

        let ids: Vec<i32> = slots.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn empty_catalog_is_not_found() {
        let now = date().and_hms_opt(8, 0, 0).unwrap();

        let result = searchable_slots(Vec::new(), date(), now);

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn nothing_left_today_is_policy_violation() {
        let now = date().and_hms_opt(22, 0, 0).unwrap();

        let result = searchable_slots(vec![slot(1, 9), slot(2, 10)], date(), now);

        assert!(matches!(
            result,
            Err(AppError::BookingErr(BookingError::NoSlotsRemaining))
        ));
    }

    #[test]
    fn picks_earliest_free_slot_without_request() {
        let (chosen, alternatives) = pick_slot(vec![slot(2, 10), slot(3, 11)], None).unwrap();

        assert_eq!(chosen.id, 2);
        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].id, 3);
    }

    #[test]
    fn picks_requested_slot_only_when_free() {
        let free = vec![slot(1, 9), slot(3, 11)];

        let (chosen, alternatives) = pick_slot(free.clone(), Some(3)).unwrap();
        assert_eq!(chosen.id, 3);
        assert_eq!(alternatives.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1]);

        assert!(pick_slot(free, Some(2)).is_none());
    }

    #[test]
    fn nothing_free_yields_no_pick() {
        assert!(pick_slot(Vec::new(), None).is_none());
    }
}
