//! SeaORM entity models for the booking service schema.

pub mod prelude;

pub mod booking;
pub mod feedback;
pub mod feedback_entry;
pub mod time_slot;
pub mod workout;
pub mod workout_option;
