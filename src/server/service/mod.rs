//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing scheduling rules and validation
//! - **Orchestration**: Coordinating repository calls and the user directory
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running every booking mutation inside one transaction
//!
//! Services that evaluate time-dependent rules capture the current local time when they
//! are constructed; `at` replaces it with a fixed instant.

pub mod availability;
pub mod booking;
pub mod directory;
pub mod feedback;
pub mod session_window;
pub mod time_slot;
pub mod workout;

#[cfg(test)]
mod test;
