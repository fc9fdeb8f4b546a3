//! Semester factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a semester with a unique generated label.
pub async fn create_semester(db: &DatabaseConnection) -> Result<entity::semester::Model, DbErr> {
    create_semester_labeled(db, format!("Term {}", next_id())).await
}

/// Creates a semester with the given label, e.g. `"Fall 2023"`.
pub async fn create_semester_labeled(
    db: &DatabaseConnection,
    label: impl Into<String>,
) -> Result<entity::semester::Model, DbErr> {
    entity::semester::ActiveModel {
        label: ActiveValue::Set(label.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
