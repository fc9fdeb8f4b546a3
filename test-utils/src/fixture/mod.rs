//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for use in unit tests and as
//! default values for factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let member = fixture::member::entity();
//!
//! let alumnus = fixture::member::entity_builder()
//!     .status("Alumnus")
//!     .build();
//! ```

pub mod event;
pub mod member;

pub use event::{entity as event_entity, entity_builder as event_entity_builder};
pub use member::{entity as member_entity, entity_builder as member_entity_builder};
