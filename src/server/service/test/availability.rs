use super::*;
use crate::server::{
    error::{booking::BookingError, AppError},
    model::availability::AvailabilityQuery,
    service::availability::AvailabilityService,
    util::date::DateInput,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::booking::BookingFactory};

fn tomorrow() -> Option<DateInput> {
    Some(DateInput::Text("2030-06-11".to_string()))
}

/// Tests a coach schedule on a future date.
///
/// Expected: Ok with every slot, the booked one flagged
#[tokio::test]
async fn schedule_flags_booked_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let directory = StubDirectory::new().with_coach("coach_1");

    let (morning, _option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let evening = factory::create_time_slot(db, "18:00", "19:00").await?;
    BookingFactory::new(db, morning.id, workout.id, "coach_1", "client_1")
        .date(day(11))
        .build()
        .await?;
    BookingFactory::new(db, evening.id, workout.id, "coach_1", "client_2")
        .date(day(11))
        .state("cancelled")
        .build()
        .await?;

    let service = AvailabilityService::new(db, &directory).at(at(8, 0));
    let schedule = service
        .coach_schedule("coach_1", tomorrow(), None)
        .await
        .unwrap();

    assert_eq!(schedule.date, day(11));
    let slots: Vec<(i32, bool)> = schedule
        .slots
        .iter()
        .map(|s| (s.time_slot.id, s.booked))
        .collect();
    assert_eq!(slots, vec![(morning.id, true), (evening.id, false)]);

    Ok(())
}

/// Tests today's schedule after some slots have started.
///
/// Expected: Ok with only the slots that have not started, and Err(SlotUnavailable) when
/// asking for a started slot
#[tokio::test]
async fn schedule_today_hides_started_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let directory = StubDirectory::new().with_coach("coach_1");

    let (morning, _option, _workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let evening = factory::create_time_slot(db, "18:00", "19:00").await?;

    let service = AvailabilityService::new(db, &directory).at(at(9, 30));

    let schedule = service.coach_schedule("coach_1", None, None).await.unwrap();
    let ids: Vec<i32> = schedule.slots.iter().map(|s| s.time_slot.id).collect();
    assert_eq!(ids, vec![evening.id]);

    let started = service
        .coach_schedule("coach_1", None, Some(morning.id))
        .await;
    assert!(matches!(
        started,
        Err(AppError::BookingErr(BookingError::SlotUnavailable))
    ));

    let late = service.at(at(23, 0)).coach_schedule("coach_1", None, None).await;
    assert!(matches!(
        late,
        Err(AppError::BookingErr(BookingError::NoSlotsRemaining))
    ));

    Ok(())
}

/// Tests restricting the schedule to one slot.
///
/// Expected: Ok with only the requested slot
#[tokio::test]
async fn schedule_restricted_to_requested_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let directory = StubDirectory::new().with_coach("coach_1");

    factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let evening = factory::create_time_slot(db, "18:00", "19:00").await?;

    let service = AvailabilityService::new(db, &directory).at(at(8, 0));
    let schedule = service
        .coach_schedule("coach_1", tomorrow(), Some(evening.id))
        .await
        .unwrap();

    assert_eq!(schedule.slots.len(), 1);
    assert_eq!(schedule.slots[0].time_slot.id, evening.id);
    assert!(!schedule.slots[0].booked);

    Ok(())
}

/// Tests that an empty catalog cannot be searched.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn schedule_without_slots_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let directory = StubDirectory::new().with_coach("coach_1");

    let service = AvailabilityService::new(db, &directory).at(at(8, 0));
    let result = service.coach_schedule("coach_1", tomorrow(), None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests searching without a slot.
///
/// Expected: Ok with each coach's earliest free slot and the rest as alternatives
#[tokio::test]
async fn resolves_earliest_free_slot_per_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let directory = StubDirectory::new()
        .with_coach("coach_1")
        .with_coach("coach_2");

    let (morning, option, workout_1) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let evening = factory::create_time_slot(db, "18:00", "19:00").await?;
    factory::create_workout(db, option.id, "coach_2").await?;
    BookingFactory::new(db, morning.id, workout_1.id, "coach_1", "client_1")
        .date(day(11))
        .build()
        .await?;

    let service = AvailabilityService::new(db, &directory).at(at(8, 0));
    let records = service
        .resolve_availability(AvailabilityQuery {
            date: tomorrow(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(records.len(), 2);

    let coach_1 = records.iter().find(|r| r.coach.id == "coach_1").unwrap();
    assert_eq!(coach_1.time_slot.id, evening.id);
    assert!(coach_1.alternative_slots.is_empty());
    assert_eq!(coach_1.workout.workout_option_name, option.name);

    let coach_2 = records.iter().find(|r| r.coach.id == "coach_2").unwrap();
    assert_eq!(coach_2.time_slot.id, morning.id);
    let alternatives: Vec<i32> = coach_2.alternative_slots.iter().map(|s| s.id).collect();
    assert_eq!(alternatives, vec![evening.id]);

    Ok(())
}

/// Tests filtering by workout option and skipping coaches the directory does not know.
///
/// Expected: Ok with only the known coach offering the requested option
#[tokio::test]
async fn filters_by_option_and_known_coaches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let directory = StubDirectory::new()
        .with_coach("coach_1")
        .with_coach("coach_2");

    let (_slot, yoga, _workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let boxing = factory::create_workout_option(db).await?;
    factory::create_workout(db, boxing.id, "coach_2").await?;
    factory::create_workout(db, yoga.id, "retired_coach").await?;

    let service = AvailabilityService::new(db, &directory).at(at(8, 0));
    let records = service
        .resolve_availability(AvailabilityQuery {
            workout_option_id: Some(yoga.id),
            date: tomorrow(),
            ..Default::default()
        })
        .await
        .unwrap();

    let coaches: Vec<&str> = records.iter().map(|r| r.coach.id.as_str()).collect();
    assert_eq!(coaches, vec!["coach_1"]);

    let none = service
        .resolve_availability(AvailabilityQuery {
            coach_id: Some("coach_2".to_string()),
            workout_option_id: Some(yoga.id),
            date: tomorrow(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(none.is_empty());

    Ok(())
}
