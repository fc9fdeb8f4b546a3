//! Event category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a category with a unique generated name.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::event_category::Model, DbErr> {
    create_category_named(db, format!("Category {}", next_id())).await
}

/// Creates a category with the given name.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Category label, e.g. `"Social"`
pub async fn create_category_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::event_category::Model, DbErr> {
    entity::event_category::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
