use super::*;

/// Tests that only non-cancelled bookings of the listed coaches on the date are returned.
///
/// Expected: Ok with the live booking of coach_1 only
#[tokio::test]
async fn returns_live_bookings_for_listed_coaches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let late_slot = factory::create_time_slot(db, "18:00", "19:00").await?;
    let other_workout = factory::create_workout(db, option.id, "coach_2").await?;

    let live = BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
        .date(day(11))
        .build()
        .await?;
    BookingFactory::new(db, late_slot.id, workout.id, "coach_1", "client_2")
        .date(day(11))
        .state("cancelled")
        .build()
        .await?;
    BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_3")
        .date(day(12))
        .build()
        .await?;
    BookingFactory::new(db, slot.id, other_workout.id, "coach_2", "client_4")
        .date(day(11))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_live_for_coaches_on_date(vec!["coach_1".to_string()], day(11))
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![live.id]);

    Ok(())
}

/// Tests that an empty coach list short-circuits.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_coaches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_live_for_coaches_on_date(vec![], day(11)).await?;

    assert!(bookings.is_empty());

    Ok(())
}
