use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    data::semester::SemesterRepository,
    error::AppError,
    model::semester::Semester,
    util::{deadline::with_deadline, parse::require_text},
};

pub struct SemesterService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> SemesterService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    pub async fn get_all(&self) -> Result<Vec<Semester>, AppError> {
        let repo = SemesterRepository::new(self.db);

        with_deadline(self.timeout, repo.get_all()).await
    }

    pub async fn create(&self, label: String) -> Result<Semester, AppError> {
        let label = require_text("semester", label)?;
        let repo = SemesterRepository::new(self.db);

        let semester = with_deadline(self.timeout, repo.create(label)).await?;

        tracing::info!("Created semester '{}'", semester.label);

        Ok(semester)
    }

    /// Resolves a semester label to its row
    ///
    /// # Returns
    /// - `Ok(Semester)`: Semester with that label
    /// - `Err(AppError::NotFound)`: No semester has that label
    pub async fn resolve(&self, label: &str) -> Result<Semester, AppError> {
        let repo = SemesterRepository::new(self.db);

        with_deadline(self.timeout, repo.find_by_label(label))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Semester '{}' not found", label)))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Semester, AppError> {
        let repo = SemesterRepository::new(self.db);

        with_deadline(self.timeout, repo.get_by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Semester {} not found", id)))
    }
}
