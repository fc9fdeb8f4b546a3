//! SeaORM entities for the chapter roster schema.

pub mod prelude;

pub mod attendance;
pub mod event;
pub mod event_category;
pub mod member;
pub mod member_status;
pub mod semester;
