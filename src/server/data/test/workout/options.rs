use super::*;

/// Tests creating a workout option and reading it back.
///
/// Expected: Ok with option stored under its name
#[tokio::test]
async fn creates_and_gets_option() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WorkoutRepository::new(db);
    let option = repo.create_option("Yoga").await?;

    assert_eq!(option.name, "Yoga");

    let found = repo.get_option_by_id(option.id).await?;
    assert_eq!(found, Some(option));

    Ok(())
}

/// Tests that option names are unique.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_option_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::workout_option::create_workout_option_named(db, "Yoga").await?;

    let repo = WorkoutRepository::new(db);
    let result = repo.create_option("Yoga").await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a coach cannot offer the same option twice.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let option = factory::create_workout_option(db).await?;

    let repo = WorkoutRepository::new(db);
    repo.create_mapping("coach_1", option.id).await?;
    let result = repo.create_mapping("coach_1", option.id).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let found = repo.find_mapping("coach_1", option.id).await?;
    assert!(found.is_some());

    Ok(())
}
