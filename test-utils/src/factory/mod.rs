//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on, and
//! `helpers` creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let slot = factory::create_time_slot(&db, "09:00", "10:00").await?;
//!
//!     // Create a booking with all dependencies
//!     let (slot, option, workout, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db, "coach_1", "client_1").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let booking = factory::booking::BookingFactory::new(&db, slot.id, workout.id, "coach_1", "client_1")
//!     .date(yesterday)
//!     .state("waiting_for_feedback")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `time_slot` - Create time slot catalog entries
//! - `workout_option` - Create workout taxonomy entries
//! - `workout` - Create coach workout mappings
//! - `booking` - Create bookings
//! - `feedback` - Create feedback ledgers and entries
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod feedback;
pub mod helpers;
pub mod time_slot;
pub mod workout;
pub mod workout_option;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use feedback::{create_feedback, create_feedback_entry};
pub use time_slot::create_time_slot;
pub use workout::create_workout;
pub use workout_option::create_workout_option;
