use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000005_create_feedback_table::Feedback;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeedbackEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(FeedbackEntry::Id))
                    .col(integer(FeedbackEntry::FeedbackId))
                    .col(text(FeedbackEntry::Message))
                    .col(integer_null(FeedbackEntry::Rating))
                    .col(
                        timestamp(FeedbackEntry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_entry_feedback_id")
                            .from(FeedbackEntry::Table, FeedbackEntry::FeedbackId)
                            .to(Feedback::Table, Feedback::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeedbackEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FeedbackEntry {
    Table,
    Id,
    FeedbackId,
    Message,
    Rating,
    CreatedAt,
}
