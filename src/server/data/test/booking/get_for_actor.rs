use super::*;

/// Tests that bookings are found whether the actor is the coach or the client.
///
/// Expected: Ok with bookings in both roles ordered by date, with time slots attached
#[tokio::test]
async fn returns_bookings_in_either_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let user_workout = factory::create_workout(db, option.id, "user_1").await?;

    // user_1 as client on the 12th, as coach on the 11th
    BookingFactory::new(db, slot.id, workout.id, "coach_1", "user_1")
        .date(day(12))
        .build()
        .await?;
    BookingFactory::new(db, slot.id, user_workout.id, "user_1", "client_2")
        .date(day(11))
        .build()
        .await?;
    BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_3")
        .date(day(13))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_for_actor("user_1", None).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].0.date, day(11));
    assert_eq!(bookings[0].0.coach_id, "user_1");
    assert_eq!(bookings[1].0.date, day(12));
    assert_eq!(bookings[1].0.client_id, "user_1");
    assert!(bookings.iter().all(|(_, s)| s.as_ref() == Some(&slot)));

    Ok(())
}

/// Tests the optional date filter.
///
/// Expected: Ok with only the booking on the requested date
#[tokio::test]
async fn filters_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, _option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    for d in [11, 12] {
        BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
            .date(day(d))
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let bookings = repo.get_for_actor("client_1", Some(day(12))).await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].0.date, day(12));

    Ok(())
}
