use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct TimeSlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeSlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the whole slot catalog ordered by start time
    pub async fn get_all(&self) -> Result<Vec<entity::time_slot::Model>, DbErr> {
        entity::prelude::TimeSlot::find()
            .order_by_asc(entity::time_slot::Column::StartTime)
            .order_by_asc(entity::time_slot::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a slot by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::time_slot::Model>, DbErr> {
        entity::prelude::TimeSlot::find_by_id(id).one(self.db).await
    }
}
