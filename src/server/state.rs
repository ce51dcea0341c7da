//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - User directory for coach and client profiles

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::directory::UserDirectory;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn UserDirectory>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Lookup of coach and client profiles owned by the auth service.
    ///
    /// Injected as a trait object so tests can substitute a stub.
    pub directory: Arc<dyn UserDirectory>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `directory` - User directory implementation
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, directory: Arc<dyn UserDirectory>) -> Self {
        Self { db, directory }
    }
}
