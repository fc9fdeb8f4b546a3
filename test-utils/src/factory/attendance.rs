//! Attendance factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records a member's attendance status for an event.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_id` - ID of an existing member
/// - `event_id` - ID of an existing event
/// - `status` - `"Present"`, `"Absent"` or `"Excused"`
pub async fn create_attendance(
    db: &DatabaseConnection,
    member_id: i32,
    event_id: i32,
    status: &str,
) -> Result<entity::attendance::Model, DbErr> {
    entity::attendance::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        event_id: ActiveValue::Set(event_id),
        status: ActiveValue::Set(status.to_string()),
    }
    .insert(db)
    .await
}
