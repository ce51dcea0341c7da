//! Data transfer objects exchanged over the JSON API.

pub mod api;
pub mod availability;
pub mod booking;
pub mod feedback;
pub mod time_slot;
pub mod workout;
