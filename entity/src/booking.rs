use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub time_slot_id: i32,
    pub coach_id: String,
    pub client_id: String,
    pub workout_id: i32,
    pub date: Date,
    pub state: String,
    /// Set to `coach:slot:date` while the booking is live, cleared on cancellation.
    #[sea_orm(unique)]
    pub coach_slot_key: Option<String>,
    /// Set to `client:slot:date` while the booking is live, cleared on cancellation.
    #[sea_orm(unique)]
    pub client_slot_key: Option<String>,
    pub client_feedback_id: Option<i32>,
    pub coach_feedback_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::time_slot::Entity",
        from = "Column::TimeSlotId",
        to = "super::time_slot::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    TimeSlot,
    #[sea_orm(
        belongs_to = "super::workout::Entity",
        from = "Column::WorkoutId",
        to = "super::workout::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Workout,
    #[sea_orm(has_many = "super::feedback::Entity")]
    Feedback,
}

impl Related<super::time_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSlot.def()
    }
}

impl Related<super::workout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workout.def()
    }
}

impl Related<super::feedback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedback.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Builds the value stored in `coach_slot_key` / `client_slot_key` for a live booking.
pub fn slot_key(actor_id: &str, time_slot_id: i32, date: Date) -> String {
    format!("{}:{}:{}", actor_id, time_slot_id, date.format("%Y-%m-%d"))
}
