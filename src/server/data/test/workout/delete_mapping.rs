use super::*;

/// Tests removing a mapping nothing references.
///
/// Expected: Ok with mapping removed
#[tokio::test]
async fn deletes_unreferenced_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let option = factory::create_workout_option(db).await?;
    let workout = factory::create_workout(db, option.id, "coach_1").await?;

    let repo = WorkoutRepository::new(db);
    repo.delete_mapping(workout).await?;

    let found = repo.find_mapping("coach_1", option.id).await?;
    assert!(found.is_none());

    Ok(())
}

/// Tests that bookings keep their workout mapping alive.
///
/// Expected: Err from the foreign key and mapping kept
#[tokio::test]
async fn rejects_delete_of_booked_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_slot, option, workout, booking) =
        factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;

    let repo = WorkoutRepository::new(db);
    let result = repo.delete_mapping(workout).await;

    assert!(result
        .unwrap_err()
        .to_string()
        .contains("FOREIGN KEY constraint failed"));

    let found = repo.find_mapping("coach_1", option.id).await?;
    assert!(found.is_some());

    let stored = Booking::find_by_id(booking.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
