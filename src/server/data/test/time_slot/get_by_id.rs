use super::*;

#[tokio::test]
async fn finds_existing_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TimeSlot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let slot = factory::create_time_slot(db, "09:00", "10:00").await?;

    let repo = TimeSlotRepository::new(db);
    let found = repo.get_by_id(slot.id).await?;

    assert_eq!(found, Some(slot));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TimeSlot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimeSlotRepository::new(db);
    let found = repo.get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
