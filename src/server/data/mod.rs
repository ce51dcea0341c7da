//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and are generic
//! over `ConnectionTrait`, so the same repository works on the connection pool and inside a
//! `DatabaseTransaction`. All database queries, inserts, updates, and deletes are performed
//! through these repositories.

pub mod booking;
pub mod feedback;
pub mod time_slot;
pub mod workout;

#[cfg(test)]
mod test;
