use super::*;

/// Tests that only scheduled bookings on or before the date are returned.
///
/// Expected: Ok with the two scheduled bookings up to the 11th
#[tokio::test]
async fn returns_scheduled_bookings_up_to_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, _option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;

    let first = BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
        .date(day(10))
        .build()
        .await?;
    let second = BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
        .date(day(11))
        .build()
        .await?;
    BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_1")
        .date(day(12))
        .build()
        .await?;
    BookingFactory::new(db, slot.id, workout.id, "coach_1", "client_2")
        .date(day(9))
        .state("completed")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_scheduled_until(day(11)).await?;

    let ids: Vec<i32> = bookings.iter().map(|(b, _)| b.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(bookings.iter().all(|(_, s)| s.is_some()));

    Ok(())
}
