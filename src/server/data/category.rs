use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::category::Category;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::EventCategory::find()
            .order_by_asc(entity::event_category::Column::Name)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Finds a category by its exact name
    ///
    /// # Returns
    /// - `Ok(Some(Category))`: Category with that name
    /// - `Ok(None)`: No category has that name
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DbErr> {
        let category = entity::prelude::EventCategory::find()
            .filter(entity::event_category::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(category.map(Category::from_entity))
    }

    pub async fn create(&self, name: String) -> Result<Category, DbErr> {
        let category = entity::event_category::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(category))
    }
}
