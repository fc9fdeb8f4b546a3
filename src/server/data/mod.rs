//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models or column-aliased joined rows to the service layer. Every statement is
//! built through the SeaORM query builder, so values are always bound as parameters.

pub mod attendance;
pub mod category;
pub mod event;
pub mod member;
pub mod member_status;
pub mod semester;

#[cfg(test)]
mod test;
