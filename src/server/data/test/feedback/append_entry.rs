use super::*;

/// Tests appending an entry.
///
/// Verifies the entry is stored and the ledger's latest-entry time follows it.
///
/// Expected: Ok with entry created and `last_entry_at` updated
#[tokio::test]
async fn appends_entry_and_stamps_ledger() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_slot, _option, _workout, booking) =
        factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;
    let ledger = factory::create_feedback(db, booking.id, "client_1", "coach_1").await?;

    let repo = FeedbackRepository::new(db);
    let entry = repo
        .append_entry(ledger.id, "Great session", Some(5), at(11))
        .await?;

    assert_eq!(entry.feedback_id, ledger.id);
    assert_eq!(entry.message, "Great session");
    assert_eq!(entry.rating, Some(5));

    let stored = entity::prelude::Feedback::find_by_id(ledger.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.last_entry_at, Some(at(11)));

    Ok(())
}

/// Tests that later entries keep earlier ones.
///
/// Expected: Ok with both entries stored and the later time on the ledger
#[tokio::test]
async fn keeps_history_across_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_slot, _option, _workout, booking) =
        factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;
    let ledger = factory::create_feedback(db, booking.id, "client_1", "coach_1").await?;

    let repo = FeedbackRepository::new(db);
    repo.append_entry(ledger.id, "Good", Some(4), at(11)).await?;
    repo.append_entry(ledger.id, "Actually great", None, at(12))
        .await?;

    let entries = repo.get_entries(vec![ledger.id]).await?;
    assert_eq!(entries.len(), 2);

    let stored = entity::prelude::Feedback::find_by_id(ledger.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.last_entry_at, Some(at(12)));

    Ok(())
}
