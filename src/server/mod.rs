//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the chapter roster API: HTTP handlers,
//! business rules, data access and infrastructure. The backend uses Axum as the web
//! framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and envelope response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration and status labels
//! - **State** (`state`) - Shared application state (DB pool, deadline, status labels)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Utilities** (`util/`) - Deadlines, envelope-aware extractors and response helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts input, converts DTOs to params, calls service
//! 3. **Service** validates input, then calls repositories under a deadline
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO and wraps it in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
