use super::*;

/// Tests creating a ledger when none exists for the author.
///
/// Expected: Ok with an empty ledger
#[tokio::test]
async fn creates_ledger_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_slot, _option, _workout, booking) =
        factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;

    let repo = FeedbackRepository::new(db);
    let ledger = repo.get_or_create(booking.id, "client_1", "coach_1").await?;

    assert_eq!(ledger.booking_id, booking.id);
    assert_eq!(ledger.from_id, "client_1");
    assert_eq!(ledger.to_id, "coach_1");
    assert!(ledger.last_entry_at.is_none());

    Ok(())
}

/// Tests that an existing ledger is returned rather than duplicated.
///
/// Expected: Ok with the same ledger and a single row stored
#[tokio::test]
async fn returns_existing_ledger() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_slot, _option, _workout, booking) =
        factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;
    let existing = factory::create_feedback(db, booking.id, "client_1", "coach_1").await?;

    let repo = FeedbackRepository::new(db);
    let first = repo.get_or_create(booking.id, "client_1", "coach_1").await?;
    let second = repo.get_or_create(booking.id, "client_1", "coach_1").await?;

    assert_eq!(first.id, existing.id);
    assert_eq!(second.id, existing.id);

    let count = entity::prelude::Feedback::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that each direction of a booking gets its own ledger.
///
/// Expected: Ok with two distinct ledgers
#[tokio::test]
async fn keeps_directions_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_slot, _option, _workout, booking) =
        factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;

    let repo = FeedbackRepository::new(db);
    let from_client = repo.get_or_create(booking.id, "client_1", "coach_1").await?;
    let from_coach = repo.get_or_create(booking.id, "coach_1", "client_1").await?;

    assert_ne!(from_client.id, from_coach.id);
    assert_eq!(from_coach.to_id, "client_1");

    Ok(())
}
