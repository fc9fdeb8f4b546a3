use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

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
/// use entity::prelude::{Member, Semester};
///
/// let test = TestBuilder::new()
///     .with_table(Member)
///     .with_table(Semester)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
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

    /// Adds the tables required for event and attendance operations.
    ///
    /// Adds, in dependency order:
    /// - Member
    /// - EventCategory
    /// - Event
    /// - Attendance
    pub fn with_event_tables(self) -> Self {
        self.with_table(Member)
            .with_table(EventCategory)
            .with_table(Event)
            .with_table(Attendance)
    }

    /// Adds the tables required for semester status operations.
    ///
    /// Adds, in dependency order:
    /// - Member
    /// - Semester
    /// - MemberStatus
    pub fn with_status_tables(self) -> Self {
        self.with_table(Member)
            .with_table(Semester)
            .with_table(MemberStatus)
    }

    /// Adds every table of the roster schema.
    ///
    /// Use this for router tests and anything else that spans several domains.
    pub fn with_roster_tables(self) -> Self {
        self.with_event_tables()
            .with_table(Semester)
            .with_table(MemberStatus)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
