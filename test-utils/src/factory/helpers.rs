//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns (roll call, category name, semester label) from
/// colliding when a test creates several rows with default values.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event together with a freshly created category.
///
/// # Returns
/// - `Ok((category, event))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::event_category::Model, entity::event::Model), DbErr> {
    let category = crate::factory::event_category::create_category(db).await?;
    let event = crate::factory::event::create_event(db, category.id).await?;

    Ok((category, event))
}

/// Creates a member, a semester and the member's status for that semester.
///
/// # Returns
/// - `Ok((member, semester, member_status))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_status(
    db: &DatabaseConnection,
    status: &str,
) -> Result<
    (
        entity::member::Model,
        entity::semester::Model,
        entity::member_status::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let semester = crate::factory::semester::create_semester(db).await?;
    let member_status =
        crate::factory::member_status::create_member_status(db, member.id, semester.id, status)
            .await?;

    Ok((member, semester, member_status))
}
