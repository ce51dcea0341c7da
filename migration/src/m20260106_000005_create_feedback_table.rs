use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedback::Id))
                    .col(integer(Feedback::BookingId))
                    .col(string(Feedback::FromId))
                    .col(string(Feedback::ToId))
                    .col(timestamp_null(Feedback::LastEntryAt))
                    .col(
                        timestamp(Feedback::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_booking_id")
                            .from(Feedback::Table, Feedback::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One ledger per direction per booking; also the conflict target for ledger upserts
        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_booking_from")
                    .table(Feedback::Table)
                    .col(Feedback::BookingId)
                    .col(Feedback::FromId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_to_id")
                    .table(Feedback::Table)
                    .col(Feedback::ToId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_feedback_to_id")
                    .table(Feedback::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_feedback_booking_from")
                    .table(Feedback::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feedback {
    Table,
    Id,
    BookingId,
    FromId,
    ToId,
    LastEntryAt,
    CreatedAt,
}
