use super::*;

/// Tests listing options with the coaches mapped to them.
///
/// Expected: Ok with options ordered by name, each carrying its mappings
#[tokio::test]
async fn returns_options_with_mappings_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let yoga = factory::workout_option::create_workout_option_named(db, "Yoga").await?;
    let boxing = factory::workout_option::create_workout_option_named(db, "Boxing").await?;
    factory::create_workout(db, yoga.id, "coach_1").await?;
    factory::create_workout(db, yoga.id, "coach_2").await?;

    let repo = WorkoutRepository::new(db);
    let options = repo.get_all_options().await?;

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].0.id, boxing.id);
    assert!(options[0].1.is_empty());
    assert_eq!(options[1].0.id, yoga.id);

    let mut coaches: Vec<&str> = options[1].1.iter().map(|w| w.coach_id.as_str()).collect();
    coaches.sort();
    assert_eq!(coaches, vec!["coach_1", "coach_2"]);

    Ok(())
}
