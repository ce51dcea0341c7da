use super::*;

/// Tests that the catalog is returned ordered by start time regardless of insert order.
///
/// Expected: Ok with slots ordered 07:00, 09:00, 18:00
#[tokio::test]
async fn returns_slots_ordered_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TimeSlot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_time_slot(db, "18:00", "19:00").await?;
    factory::create_time_slot(db, "07:00", "08:00").await?;
    factory::create_time_slot(db, "09:00", "10:00").await?;

    let repo = TimeSlotRepository::new(db);
    let slots = repo.get_all().await?;

    let starts: Vec<&str> = slots.iter().map(|s| s.start_time.as_str()).collect();
    assert_eq!(starts, vec!["07:00", "09:00", "18:00"]);

    Ok(())
}

/// Tests an empty catalog.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TimeSlot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimeSlotRepository::new(db);
    let slots = repo.get_all().await?;

    assert!(slots.is_empty());

    Ok(())
}
