pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_time_slot_table;
mod m20260105_000002_create_workout_option_table;
mod m20260105_000003_create_workout_table;
mod m20260106_000004_create_booking_table;
mod m20260106_000005_create_feedback_table;
mod m20260106_000006_create_feedback_entry_table;
mod m20260107_000007_seed_time_slots;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_time_slot_table::Migration),
            Box::new(m20260105_000002_create_workout_option_table::Migration),
            Box::new(m20260105_000003_create_workout_table::Migration),
            Box::new(m20260106_000004_create_booking_table::Migration),
            Box::new(m20260106_000005_create_feedback_table::Migration),
            Box::new(m20260106_000006_create_feedback_entry_table::Migration),
            Box::new(m20260107_000007_seed_time_slots::Migration),
        ]
    }
}
