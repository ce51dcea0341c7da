use super::*;

/// Tests that entries of several ledgers come back oldest first.
///
/// Expected: Ok with entries ordered by creation time
#[tokio::test]
async fn returns_entries_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_slot, _option, _workout, booking) =
        factory::helpers::create_booking_with_dependencies(db, "coach_1", "client_1").await?;
    let from_client = factory::create_feedback(db, booking.id, "client_1", "coach_1").await?;
    let from_coach = factory::create_feedback(db, booking.id, "coach_1", "client_1").await?;

    factory::create_feedback_entry(db, &from_client, "third", None, at(14)).await?;
    factory::create_feedback_entry(db, &from_coach, "first", None, at(10)).await?;
    factory::create_feedback_entry(db, &from_client, "second", Some(3), at(12)).await?;

    let repo = FeedbackRepository::new(db);
    let entries = repo
        .get_entries(vec![from_client.id, from_coach.id])
        .await?;

    let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);

    Ok(())
}

/// Tests that no ids yields no entries without querying.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let entries = repo.get_entries(vec![]).await?;

    assert!(entries.is_empty());

    Ok(())
}
