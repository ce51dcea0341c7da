use super::*;

/// Tests filtering mappings by coach and by option.
///
/// Expected: Ok with matching mappings only, each joined with its option
#[tokio::test]
async fn filters_by_coach_and_option() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let yoga = factory::workout_option::create_workout_option_named(db, "Yoga").await?;
    let boxing = factory::workout_option::create_workout_option_named(db, "Boxing").await?;
    let coach_1_yoga = factory::create_workout(db, yoga.id, "coach_1").await?;
    let coach_1_boxing = factory::create_workout(db, boxing.id, "coach_1").await?;
    let coach_2_yoga = factory::create_workout(db, yoga.id, "coach_2").await?;

    let repo = WorkoutRepository::new(db);

    let by_coach = repo.get_mappings(Some("coach_1"), None).await?;
    let ids: Vec<i32> = by_coach.iter().map(|(w, _)| w.id).collect();
    assert_eq!(ids, vec![coach_1_yoga.id, coach_1_boxing.id]);
    assert_eq!(by_coach[1].1.as_ref().map(|o| o.name.as_str()), Some("Boxing"));

    let by_option = repo.get_mappings(None, Some(yoga.id)).await?;
    let ids: Vec<i32> = by_option.iter().map(|(w, _)| w.id).collect();
    assert_eq!(ids, vec![coach_1_yoga.id, coach_2_yoga.id]);

    let both = repo.get_mappings(Some("coach_2"), Some(boxing.id)).await?;
    assert!(both.is_empty());

    let all = repo.get_mappings(None, None).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests fetching one mapping with its option.
///
/// Expected: Ok with mapping and option
#[tokio::test]
async fn gets_mapping_by_id_with_option() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let option = factory::create_workout_option(db).await?;
    let workout = factory::create_workout(db, option.id, "coach_1").await?;

    let repo = WorkoutRepository::new(db);
    let found = repo.get_by_id(workout.id).await?;

    assert_eq!(found, Some((workout, Some(option))));

    let missing = repo.get_by_id(999).await?;
    assert!(missing.is_none());

    Ok(())
}
