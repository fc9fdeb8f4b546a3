use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::semester::Semester;

pub struct SemesterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SemesterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every semester in creation order
    pub async fn get_all(&self) -> Result<Vec<Semester>, DbErr> {
        let semesters = entity::prelude::Semester::find()
            .order_by_asc(entity::semester::Column::Id)
            .all(self.db)
            .await?;

        Ok(semesters.into_iter().map(Semester::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Semester>, DbErr> {
        let semester = entity::prelude::Semester::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(semester.map(Semester::from_entity))
    }

    pub async fn find_by_label(&self, label: &str) -> Result<Option<Semester>, DbErr> {
        let semester = entity::prelude::Semester::find()
            .filter(entity::semester::Column::Label.eq(label))
            .one(self.db)
            .await?;

        Ok(semester.map(Semester::from_entity))
    }

    pub async fn create(&self, label: String) -> Result<Semester, DbErr> {
        let semester = entity::semester::ActiveModel {
            label: ActiveValue::Set(label),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Semester::from_entity(semester))
    }
}
