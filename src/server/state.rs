//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::config::StatusTaxonomy;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `StatusTaxonomy` shares its label list through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Deadline applied to each database call made while handling a request.
    pub db_timeout: Duration,

    /// Member status labels accepted by every status-writing endpoint.
    pub statuses: StatusTaxonomy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `db_timeout` - Per-call database deadline
    /// - `statuses` - Configured status taxonomy
    pub fn new(db: DatabaseConnection, db_timeout: Duration, statuses: StatusTaxonomy) -> Self {
        Self {
            db,
            db_timeout,
            statuses,
        }
    }
}
