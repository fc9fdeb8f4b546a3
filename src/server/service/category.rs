use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::Category,
    util::{deadline::with_deadline, parse::require_text},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        with_deadline(self.timeout, repo.get_all()).await
    }

    pub async fn create(&self, name: String) -> Result<Category, AppError> {
        let name = require_text("categoryName", name)?;
        let repo = CategoryRepository::new(self.db);

        with_deadline(self.timeout, repo.create(name)).await
    }

    /// Resolves a category name to its row
    ///
    /// Shared by event creation and event updates, which both name categories
    /// rather than reference them by id.
    ///
    /// # Returns
    /// - `Ok(Category)`: Category with that name
    /// - `Err(AppError::NotFound)`: No category has that name
    pub async fn resolve(&self, name: &str) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        with_deadline(self.timeout, repo.find_by_name(name))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", name)))
    }
}
