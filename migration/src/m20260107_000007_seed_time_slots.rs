use sea_orm_migration::prelude::*;

use super::m20260105_000001_create_time_slot_table::TimeSlot;

/// Opening hours of the gym, one bookable hour per slot.
const FIRST_HOUR: u32 = 7;
const LAST_HOUR: u32 = 21;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(TimeSlot::Table)
            .columns([TimeSlot::StartTime, TimeSlot::EndTime])
            .to_owned();

        for hour in FIRST_HOUR..LAST_HOUR {
            insert.values_panic([
                format!("{:02}:00", hour).into(),
                format!("{:02}:00", hour + 1).into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete().from_table(TimeSlot::Table).to_owned();

        manager.exec_stmt(delete).await
    }
}
