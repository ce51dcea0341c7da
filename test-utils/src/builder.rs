use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{TimeSlot, WorkoutOption};
///
/// let test = TestBuilder::new()
///     .with_table(TimeSlot)
///     .with_table(WorkoutOption)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed once every table exists.
    ///
    /// Entity-derived schemas only carry single-column constraints, so the composite
    /// unique indexes from the migrations are registered here.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create after all tables.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the workout taxonomy tables.
    ///
    /// Adds WorkoutOption and Workout together with the unique (coach, option) index
    /// that rejects duplicate specializations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_workout_tables(self) -> Self {
        self.with_table(WorkoutOption).with_table(Workout).with_index(
            Index::create()
                .name("idx_workout_coach_option")
                .table(Workout)
                .col(entity::workout::Column::CoachId)
                .col(entity::workout::Column::WorkoutOptionId)
                .unique()
                .to_owned(),
        )
    }

    /// Adds all tables required for booking and feedback operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - TimeSlot
    /// - WorkoutOption
    /// - Workout
    /// - Booking
    /// - Feedback
    /// - FeedbackEntry
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(self) -> Self {
        self.with_table(TimeSlot)
            .with_workout_tables()
            .with_table(Booking)
            .with_table(Feedback)
            .with_table(FeedbackEntry)
            .with_index(
                Index::create()
                    .name("idx_feedback_booking_from")
                    .table(Feedback)
                    .col(entity::feedback::Column::BookingId)
                    .col(entity::feedback::Column::FromId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements in the order they were added, then all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
