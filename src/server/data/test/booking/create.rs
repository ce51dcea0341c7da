use super::*;

/// Tests creating a booking.
///
/// Verifies that the booking is stored as scheduled, without ledgers yet, and that both
/// live slot keys are filled.
///
/// Expected: Ok with scheduled booking holding both slot keys
#[tokio::test]
async fn creates_scheduled_booking_with_slot_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, _option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(NewBooking {
            time_slot_id: slot.id,
            coach_id: "coach_1".to_string(),
            client_id: "client_1".to_string(),
            workout_id: workout.id,
            date: day(11),
        })
        .await?;

    assert_eq!(booking.state, "scheduled");
    assert_eq!(booking.date, day(11));
    assert_eq!(
        booking.coach_slot_key,
        Some(entity::booking::slot_key("coach_1", slot.id, day(11)))
    );
    assert_eq!(
        booking.client_slot_key,
        Some(entity::booking::slot_key("client_1", slot.id, day(11)))
    );
    assert!(booking.client_feedback_id.is_none());
    assert!(booking.coach_feedback_id.is_none());

    let stored = entity::prelude::Booking::find_by_id(booking.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that the coach slot key rejects a second live booking.
///
/// Expected: Err with unique constraint violation naming the coach key
#[tokio::test]
async fn rejects_second_live_booking_for_coach_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, _option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
        .date(day(11))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(NewBooking {
            time_slot_id: slot.id,
            coach_id: "coach_1".to_string(),
            client_id: "client_2".to_string(),
            workout_id: workout.id,
            date: day(11),
        })
        .await;

    let err = result.unwrap_err();
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            assert!(msg.contains("coach_slot_key"))
        }
        other => panic!("expected unique violation, got {:?}", other),
    }

    Ok(())
}

/// Tests that the client slot key rejects the client double-booking another coach.
///
/// Expected: Err with unique constraint violation naming the client key
#[tokio::test]
async fn rejects_second_live_booking_for_client_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let other_workout = factory::create_workout(db, option.id, "coach_2").await?;
    BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
        .date(day(11))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(NewBooking {
            time_slot_id: slot.id,
            coach_id: "coach_2".to_string(),
            client_id: "client_1".to_string(),
            workout_id: other_workout.id,
            date: day(11),
        })
        .await;

    let err = result.unwrap_err();
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            assert!(msg.contains("client_slot_key"))
        }
        other => panic!("expected unique violation, got {:?}", other),
    }

    Ok(())
}

/// Tests that the same coach and slot can be booked on different dates.
///
/// Expected: Ok with two bookings
#[tokio::test]
async fn allows_same_slot_on_different_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, _option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;

    let repo = BookingRepository::new(db);
    for d in [11, 12] {
        repo.create(NewBooking {
            time_slot_id: slot.id,
            coach_id: "coach_1".to_string(),
            client_id: "client_1".to_string(),
            workout_id: workout.id,
            date: day(d),
        })
        .await?;
    }

    let count = entity::prelude::Booking::find().all(db).await?.len();
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that a cancelled booking does not hold the slot.
///
/// Expected: Ok with new booking created
#[tokio::test]
async fn allows_rebooking_slot_held_by_cancelled_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, _option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
        .date(day(11))
        .state("cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(NewBooking {
            time_slot_id: slot.id,
            coach_id: "coach_1".to_string(),
            client_id: "client_2".to_string(),
            workout_id: workout.id,
            date: day(11),
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}
