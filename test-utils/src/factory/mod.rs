//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own factory module with a `create_*` convenience function and,
//! where customization is common, a builder-style `Factory` struct.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let member = factory::create_member(&db).await?;
//!     let (category, event) = factory::helpers::create_event_with_category(&db).await?;
//!     factory::create_attendance(&db, member.id, event.id, "Present").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let member = factory::member::MemberFactory::new(&db)
//!     .roll_call(42)
//!     .status("Alumnus")
//!     .major(None)
//!     .build()
//!     .await?;
//! ```

pub mod attendance;
pub mod event;
pub mod event_category;
pub mod helpers;
pub mod member;
pub mod member_status;
pub mod semester;

pub use attendance::create_attendance;
pub use event::create_event;
pub use event_category::{create_category, create_category_named};
pub use member::create_member;
pub use member_status::create_member_status;
pub use semester::{create_semester, create_semester_labeled};
