use super::*;

/// Tests cancelling a scheduled booking.
///
/// Verifies the state changes and both live slot keys are cleared.
///
/// Expected: Ok(1) with keys cleared
#[tokio::test]
async fn cancels_and_clears_slot_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_slot, _option, _workout, booking) =
        factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;

    let repo = BookingRepository::new(db);
    let rows = repo
        .transition_state(booking.id, BookingState::Scheduled, BookingState::Cancelled)
        .await?;

    assert_eq!(rows, 1);

    let stored = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.state, "cancelled");
    assert!(stored.coach_slot_key.is_none());
    assert!(stored.client_slot_key.is_none());

    Ok(())
}

/// Tests a non-cancelling transition.
///
/// Expected: Ok(1) with keys kept
#[tokio::test]
async fn keeps_slot_keys_when_not_cancelling() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_slot, _option, _workout, booking) =
        factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;

    let repo = BookingRepository::new(db);
    let rows = repo
        .transition_state(
            booking.id,
            BookingState::Scheduled,
            BookingState::WaitingForFeedback,
        )
        .await?;

    assert_eq!(rows, 1);

    let stored = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.state, "waiting_for_feedback");
    assert_eq!(stored.coach_slot_key, booking.coach_slot_key);
    assert_eq!(stored.client_slot_key, booking.client_slot_key);

    Ok(())
}

/// Tests that the transition only applies when the stored state matches.
///
/// Expected: Ok(0) with booking unchanged
#[tokio::test]
async fn does_nothing_when_state_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, _option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let booking = BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
        .date(day(11))
        .state("completed")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let rows = repo
        .transition_state(booking.id, BookingState::Scheduled, BookingState::Cancelled)
        .await?;

    assert_eq!(rows, 0);

    let stored = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.state, "completed");
    assert!(stored.coach_slot_key.is_some());

    Ok(())
}

/// Tests transitioning a booking that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let rows = repo
        .transition_state(999, BookingState::Scheduled, BookingState::Cancelled)
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
