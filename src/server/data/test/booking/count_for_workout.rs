use super::*;

/// Tests counting the bookings that reference a workout mapping.
///
/// Expected: Ok with cancelled bookings included and other workouts excluded
#[tokio::test]
async fn counts_bookings_in_every_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let unused = factory::create_workout(db, option.id, "coach_2").await?;

    BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
        .date(day(11))
        .build()
        .await?;
    BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_2")
        .date(day(12))
        .state("cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.count_for_workout(workout.id).await?, 2);
    assert_eq!(repo.count_for_workout(unused.id).await?, 0);

    Ok(())
}
