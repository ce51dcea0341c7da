use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::availability::UserProfileDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateFeedbackDto {
    pub message: String,
    pub rating: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FeedbackEntryDto {
    pub id: i32,
    pub message: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FeedbackDto {
    pub id: i32,
    pub booking_id: i32,
    pub from_id: String,
    pub to_id: String,
    pub last_entry_at: Option<DateTime<Utc>>,
    pub entries: Vec<FeedbackEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FeedbackViewItemDto {
    pub feedback_id: i32,
    pub booking_id: i32,
    pub counterpart_id: String,
    pub counterpart: Option<UserProfileDto>,
    pub latest: FeedbackEntryDto,
    pub history: Vec<FeedbackEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedFeedbackDto {
    pub feedback: Vec<FeedbackViewItemDto>,
    pub average_rating: Option<f64>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FeedbackStatsDto {
    pub coach_id: String,
    /// Ledgers with at least one entry, rated or not.
    pub review_count: u64,
    /// Ledgers whose latest entry carries a rating.
    pub rated_count: u64,
    /// Number of latest ratings equal to 1, 2, 3, 4 and 5.
    pub histogram: Vec<u64>,
    pub average_rating: f64,
}
