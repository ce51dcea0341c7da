use super::*;

/// Tests that only non-empty ledgers addressed to the recipient are paginated.
///
/// Verifies that empty ledgers and ledgers addressed to others are excluded, and that
/// pages are ordered by most recent entry.
///
/// Expected: Ok with the newest ledger on page 0, the older on page 1, total 2
#[tokio::test]
async fn paginates_non_empty_ledgers_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (slot, _option, workout) =
        factory::helpers::create_booking_dependencies(db, "coach_1").await?;
    let late_slot = factory::create_time_slot(db, "18:00", "19:00").await?;
    let first = factory::create_booking(db, slot.id, workout.id, "coach_1", "client_1").await?;
    let second =
        factory::create_booking(db, late_slot.id, workout.id, "coach_1", "client_2").await?;

    let older = factory::create_feedback(db, first.id, "client_1", "coach_1").await?;
    factory::create_feedback_entry(db, &older, "ok", Some(3), at(10)).await?;

    let newer = factory::create_feedback(db, second.id, "client_2", "coach_1").await?;
    factory::create_feedback_entry(db, &newer, "great", Some(5), at(12)).await?;

    // Empty ledger to the coach and a ledger addressed to a client
    factory::create_feedback(db, first.id, "coach_1", "client_1").await?;
    let to_client = factory::create_feedback(db, second.id, "coach_1", "client_2").await?;
    factory::create_feedback_entry(db, &to_client, "punctual", Some(4), at(13)).await?;

    let repo = FeedbackRepository::new(db);

    let (page0, total) = repo.get_received_paginated("coach_1", 0, 1).await?;
    assert_eq!(total, 2);
    assert_eq!(page0.len(), 1);
    assert_eq!(page0[0].id, newer.id);

    let (page1, _) = repo.get_received_paginated("coach_1", 1, 1).await?;
    assert_eq!(page1.len(), 1);
    assert_eq!(page1[0].id, older.id);

    let (page2, _) = repo.get_received_paginated("coach_1", 2, 1).await?;
    assert!(page2.is_empty());

    Ok(())
}

/// Tests a recipient without feedback.
///
/// Expected: Ok with empty page and zero total
#[tokio::test]
async fn returns_empty_page_for_recipient_without_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let (ledgers, total) = repo.get_received_paginated("coach_1", 0, 10).await?;

    assert!(ledgers.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
