use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

pub struct WorkoutRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkoutRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a workout option
    pub async fn create_option(&self, name: &str) -> Result<entity::workout_option::Model, DbErr> {
        entity::workout_option::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a workout option by ID
    pub async fn get_option_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::workout_option::Model>, DbErr> {
        entity::prelude::WorkoutOption::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets every workout option with the coach mappings that reference it, ordered by name
    pub async fn get_all_options(
        &self,
    ) -> Result<Vec<(entity::workout_option::Model, Vec<entity::workout::Model>)>, DbErr> {
        let mut options = entity::prelude::WorkoutOption::find()
            .find_with_related(entity::prelude::Workout)
            .all(self.db)
            .await?;

        // Consolidation of the joined rows does not keep the query order
        options.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(options)
    }

    /// Maps a coach to a workout option
    pub async fn create_mapping(
        &self,
        coach_id: &str,
        workout_option_id: i32,
    ) -> Result<entity::workout::Model, DbErr> {
        entity::workout::ActiveModel {
            coach_id: ActiveValue::Set(coach_id.to_string()),
            workout_option_id: ActiveValue::Set(workout_option_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the mapping between a coach and a workout option
    pub async fn find_mapping(
        &self,
        coach_id: &str,
        workout_option_id: i32,
    ) -> Result<Option<entity::workout::Model>, DbErr> {
        entity::prelude::Workout::find()
            .filter(entity::workout::Column::CoachId.eq(coach_id))
            .filter(entity::workout::Column::WorkoutOptionId.eq(workout_option_id))
            .one(self.db)
            .await
    }

    /// Deletes a mapping
    pub async fn delete_mapping(&self, mapping: entity::workout::Model) -> Result<(), DbErr> {
        mapping.delete(self.db).await?;

        Ok(())
    }

    /// Gets a mapping by ID together with its option
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(entity::workout::Model, Option<entity::workout_option::Model>)>, DbErr>
    {
        entity::prelude::Workout::find_by_id(id)
            .find_also_related(entity::prelude::WorkoutOption)
            .one(self.db)
            .await
    }

    /// Gets mappings with their options, optionally filtered by coach and/or option
    pub async fn get_mappings(
        &self,
        coach_id: Option<&str>,
        workout_option_id: Option<i32>,
    ) -> Result<Vec<(entity::workout::Model, Option<entity::workout_option::Model>)>, DbErr> {
        let mut query =
            entity::prelude::Workout::find().find_also_related(entity::prelude::WorkoutOption);

        if let Some(coach_id) = coach_id {
            query = query.filter(entity::workout::Column::CoachId.eq(coach_id));
        }

        if let Some(workout_option_id) = workout_option_id {
            query = query.filter(entity::workout::Column::WorkoutOptionId.eq(workout_option_id));
        }

        query
            .order_by_asc(entity::workout::Column::Id)
            .all(self.db)
            .await
    }
}
