use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateWorkoutOptionDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WorkoutOptionDto {
    pub id: i32,
    pub name: String,
    pub coach_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WorkoutDto {
    pub id: i32,
    pub coach_id: String,
    pub workout_option_id: i32,
    pub workout_option_name: String,
}
