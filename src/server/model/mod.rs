//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models (or joined query rows) at the repository boundary and transformed to DTOs at the
//! controller boundary.

pub mod attendance;
pub mod category;
pub mod count;
pub mod event;
pub mod member;
pub mod semester;
pub mod status;
