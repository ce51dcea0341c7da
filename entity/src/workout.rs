use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "workout")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub workout_option_id: i32,
    pub coach_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workout_option::Entity",
        from = "Column::WorkoutOptionId",
        to = "super::workout_option::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WorkoutOption,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::workout_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutOption.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
