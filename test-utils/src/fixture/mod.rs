//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of pure scheduling logic that only needs entity models.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let slot = fixture::time_slot::entity("09:00", "10:00");
//! ```

pub mod time_slot;
