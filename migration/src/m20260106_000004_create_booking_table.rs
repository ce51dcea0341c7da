use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_time_slot_table::TimeSlot,
    m20260105_000003_create_workout_table::Workout,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::TimeSlotId))
                    .col(string(Booking::CoachId))
                    .col(string(Booking::ClientId))
                    .col(integer(Booking::WorkoutId))
                    .col(date(Booking::Date))
                    .col(string_len(Booking::State, 32).default("scheduled"))
                    // Nullable unique keys: only live bookings hold a value, so a cancelled
                    // booking frees the (coach, slot, date) and (client, slot, date) pairs.
                    .col(string_null(Booking::CoachSlotKey).unique_key())
                    .col(string_null(Booking::ClientSlotKey).unique_key())
                    .col(integer_null(Booking::ClientFeedbackId))
                    .col(integer_null(Booking::CoachFeedbackId))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_time_slot_id")
                            .from(Booking::Table, Booking::TimeSlotId)
                            .to(TimeSlot::Table, TimeSlot::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_workout_id")
                            .from(Booking::Table, Booking::WorkoutId)
                            .to(Workout::Table, Workout::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_coach_date")
                    .table(Booking::Table)
                    .col(Booking::CoachId)
                    .col(Booking::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_client_date")
                    .table(Booking::Table)
                    .col(Booking::ClientId)
                    .col(Booking::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_client_date")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_coach_date")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    TimeSlotId,
    CoachId,
    ClientId,
    WorkoutId,
    Date,
    State,
    CoachSlotKey,
    ClientSlotKey,
    ClientFeedbackId,
    CoachFeedbackId,
    CreatedAt,
}
