//! Feedback ledger domain models.
//!
//! Each booking has two ledgers, client → coach and coach → client. A ledger is an
//! append-only list of entries; the most recent entry is the one that counts for ratings.

use chrono::{DateTime, Utc};

use crate::{
    model::feedback::{
        CreateFeedbackDto, FeedbackDto, FeedbackEntryDto, FeedbackStatsDto, FeedbackViewItemDto,
        PaginatedFeedbackDto,
    },
    server::{error::AppError, model::directory::UserProfile},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackEntry {
    pub id: i32,
    pub message: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl FeedbackEntry {
    pub fn from_entity(entity: entity::feedback_entry::Model) -> Self {
        Self {
            id: entity.id,
            message: entity.message,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FeedbackEntryDto {
        FeedbackEntryDto {
            id: self.id,
            message: self.message,
            rating: self.rating,
            created_at: self.created_at,
        }
    }
}

/// A directional ledger with its full entry history, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: i32,
    pub booking_id: i32,
    pub from_id: String,
    pub to_id: String,
    pub last_entry_at: Option<DateTime<Utc>>,
    pub entries: Vec<FeedbackEntry>,
}

impl Feedback {
    /// Converts a ledger entity and its entries into a domain model.
    ///
    /// Entries are ordered oldest first regardless of the order they were loaded in.
    pub fn from_entity(
        entity: entity::feedback::Model,
        entries: Vec<entity::feedback_entry::Model>,
    ) -> Self {
        let mut entries: Vec<FeedbackEntry> =
            entries.into_iter().map(FeedbackEntry::from_entity).collect();
        entries.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

        Self {
            id: entity.id,
            booking_id: entity.booking_id,
            from_id: entity.from_id,
            to_id: entity.to_id,
            last_entry_at: entity.last_entry_at,
            entries,
        }
    }

    /// Most recent entry of the ledger.
    pub fn latest(&self) -> Option<&FeedbackEntry> {
        self.entries.last()
    }

    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            booking_id: self.booking_id,
            from_id: self.from_id,
            to_id: self.to_id,
            last_entry_at: self.last_entry_at,
            entries: self
                .entries
                .into_iter()
                .map(FeedbackEntry::into_dto)
                .collect(),
        }
    }
}

/// Parameters for appending feedback to a booking.
#[derive(Debug, Clone)]
pub struct CreateFeedbackParams {
    pub booking_id: i32,
    pub message: String,
    pub rating: Option<i32>,
}

impl CreateFeedbackParams {
    pub fn from_dto(booking_id: i32, dto: CreateFeedbackDto) -> Self {
        Self {
            booking_id,
            message: dto.message,
            rating: dto.rating,
        }
    }
}

/// Ordering applied to a fetched feedback page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackSort {
    /// Highest latest rating first, unrated ledgers last.
    Rating,
    /// Most recent latest entry first.
    #[default]
    Recent,
}

impl FeedbackSort {
    /// Parses the `sort_by` query value. A missing value sorts by recency.
    ///
    /// # Returns
    /// - `Ok(FeedbackSort)` - `rating` or `recent`
    /// - `Err(AppError::BadRequest)` - Any other value
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim) {
            None | Some("") | Some("recent") => Ok(Self::Recent),
            Some("rating") => Ok(Self::Rating),
            Some(other) => Err(AppError::BadRequest(format!(
                "Unknown sort order '{}', expected 'rating' or 'recent'",
                other
            ))),
        }
    }
}

/// One ledger addressed to a coach, as shown in the coach's feedback view.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackViewItem {
    pub feedback_id: i32,
    pub booking_id: i32,
    pub counterpart_id: String,
    pub counterpart: Option<UserProfile>,
    pub latest: FeedbackEntry,
    pub history: Vec<FeedbackEntry>,
}

impl FeedbackViewItem {
    /// Builds a view item from a ledger. Returns `None` for an empty ledger.
    pub fn from_feedback(feedback: Feedback, counterpart: Option<UserProfile>) -> Option<Self> {
        let latest = feedback.latest()?.clone();

        Some(Self {
            feedback_id: feedback.id,
            booking_id: feedback.booking_id,
            counterpart_id: feedback.from_id,
            counterpart,
            latest,
            history: feedback.entries,
        })
    }

    pub fn into_dto(self) -> FeedbackViewItemDto {
        FeedbackViewItemDto {
            feedback_id: self.feedback_id,
            booking_id: self.booking_id,
            counterpart_id: self.counterpart_id,
            counterpart: self.counterpart.map(UserProfile::into_dto),
            latest: self.latest.into_dto(),
            history: self
                .history
                .into_iter()
                .map(FeedbackEntry::into_dto)
                .collect(),
        }
    }
}

/// Sorts an already fetched page in place.
pub fn sort_page(items: &mut [FeedbackViewItem], sort: FeedbackSort) {
    match sort {
        FeedbackSort::Recent => {
            items.sort_by(|a, b| b.latest.created_at.cmp(&a.latest.created_at));
        }
        FeedbackSort::Rating => {
            // `Option` orders `None` first, so descending puts unrated ledgers last
            items.sort_by(|a, b| {
                b.latest
                    .rating
                    .cmp(&a.latest.rating)
                    .then_with(|| b.latest.created_at.cmp(&a.latest.created_at))
            });
        }
    }
}

/// Mean of the latest ratings on a page, `None` when nothing on the page is rated.
pub fn average_latest_rating(items: &[FeedbackViewItem]) -> Option<f64> {
    let ratings: Vec<i32> = items.iter().filter_map(|i| i.latest.rating).collect();

    if ratings.is_empty() {
        return None;
    }

    Some(ratings.iter().map(|r| *r as f64).sum::<f64>() / ratings.len() as f64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedFeedback {
    pub feedback: Vec<FeedbackViewItem>,
    pub average_rating: Option<f64>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedFeedback {
    pub fn into_dto(self) -> PaginatedFeedbackDto {
        PaginatedFeedbackDto {
            feedback: self
                .feedback
                .into_iter()
                .map(FeedbackViewItem::into_dto)
                .collect(),
            average_rating: self.average_rating,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Rating statistics over every non-empty ledger addressed to a coach.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackStats {
    pub coach_id: String,
    /// Non-empty ledgers addressed to the coach, rated or not.
    pub review_count: u64,
    pub rated_count: u64,
    /// Counts of latest ratings equal to 1 through 5.
    pub histogram: [u64; 5],
    /// Mean of latest ratings, 0 when nothing is rated.
    pub average_rating: f64,
}

impl FeedbackStats {
    /// Computes statistics from the latest rating of each ledger.
    ///
    /// Every ledger counts towards `review_count`. Unrated ledgers and ratings outside 1–5
    /// are left out of the histogram and the mean.
    pub fn from_latest_ratings(
        coach_id: String,
        ratings: impl IntoIterator<Item = Option<i32>>,
    ) -> Self {
        let ratings: Vec<Option<i32>> = ratings.into_iter().collect();
        let review_count = ratings.len() as u64;

        let mut histogram = [0u64; 5];
        let mut sum = 0u64;

        for rating in ratings.into_iter().flatten() {
            if (1..=5).contains(&rating) {
                histogram[(rating - 1) as usize] += 1;
                sum += rating as u64;
            }
        }

        let rated_count: u64 = histogram.iter().sum();
        let average_rating = if rated_count > 0 {
            sum as f64 / rated_count as f64
        } else {
            0.0
        };

        Self {
            coach_id,
            review_count,
            rated_count,
            histogram,
            average_rating,
        }
    }

    pub fn into_dto(self) -> FeedbackStatsDto {
        FeedbackStatsDto {
            coach_id: self.coach_id,
            review_count: self.review_count,
            rated_count: self.rated_count,
            histogram: self.histogram.to_vec(),
            average_rating: self.average_rating,
        }
    }
}
