//! HTTP request handlers.
//!
//! Controllers authenticate the caller, convert DTOs to service parameters, call a
//! service and convert the resulting domain models back into DTOs.

pub mod availability;
pub mod booking;
pub mod feedback;
pub mod time_slot;
pub mod workout;
