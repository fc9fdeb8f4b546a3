//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Required fields and the configured status taxonomy, checked before any write
//! - **Orchestration**: Lookup-then-write sequences such as resolving a category name or semester label
//! - **Deadlines**: Every repository call runs under the configured per-call database deadline
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod attendance;
pub mod category;
pub mod event;
pub mod member;
pub mod semester;
pub mod status;

#[cfg(test)]
mod test;
