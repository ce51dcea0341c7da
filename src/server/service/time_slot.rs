use sea_orm::DatabaseConnection;

use crate::server::{
    data::time_slot::TimeSlotRepository, error::AppError, model::time_slot::TimeSlot,
};

pub struct TimeSlotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeSlotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the slot catalog ordered by start time
    pub async fn get_all(&self) -> Result<Vec<TimeSlot>, AppError> {
        let repo = TimeSlotRepository::new(self.db);

        let slots = repo
            .get_all()
            .await?
            .into_iter()
            .map(TimeSlot::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(slots)
    }
}
