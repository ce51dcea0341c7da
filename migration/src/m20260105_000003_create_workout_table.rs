use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_workout_option_table::WorkoutOption;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workout::Table)
                    .if_not_exists()
                    .col(pk_auto(Workout::Id))
                    .col(integer(Workout::WorkoutOptionId))
                    .col(string(Workout::CoachId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workout_workout_option_id")
                            .from(Workout::Table, Workout::WorkoutOptionId)
                            .to(WorkoutOption::Table, WorkoutOption::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A coach offers each workout option at most once
        manager
            .create_index(
                Index::create()
                    .name("idx_workout_coach_option")
                    .table(Workout::Table)
                    .col(Workout::CoachId)
                    .col(Workout::WorkoutOptionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_workout_coach_option")
                    .table(Workout::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Workout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workout {
    Table,
    Id,
    WorkoutOptionId,
    CoachId,
}
