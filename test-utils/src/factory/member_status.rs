//! Member status factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records a member's status label for a semester.
pub async fn create_member_status(
    db: &DatabaseConnection,
    member_id: i32,
    semester_id: i32,
    status: &str,
) -> Result<entity::member_status::Model, DbErr> {
    entity::member_status::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        semester_id: ActiveValue::Set(semester_id),
        status: ActiveValue::Set(status.to_string()),
    }
    .insert(db)
    .await
}
