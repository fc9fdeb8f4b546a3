use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{EventField, EventPatch};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every event with its category, most recent first
    pub async fn get_all(
        &self,
    ) -> Result<
        Vec<(
            entity::event::Model,
            Option<entity::event_category::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Event::find()
            .find_also_related(entity::prelude::EventCategory)
            .order_by_desc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets an event by ID with its category
    ///
    /// # Returns
    /// - `Ok(Some((event, category)))`: Event found
    /// - `Ok(None)`: No event with that id
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::event::Model,
            Option<entity::event_category::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Event::find_by_id(id)
            .find_also_related(entity::prelude::EventCategory)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Inserts an event into an already resolved category
    pub async fn create(
        &self,
        name: String,
        category_id: i32,
        location: String,
        date: NaiveDate,
    ) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            name: ActiveValue::Set(name),
            category_id: ActiveValue::Set(category_id),
            location: ActiveValue::Set(location),
            date: ActiveValue::Set(date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a sparse update, writing only the columns present in the patch
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows updated, `0` when the event does not exist
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, patch: EventPatch) -> Result<u64, DbErr> {
        use entity::event::Column;

        let mut update = entity::prelude::Event::update_many();
        for field in patch.fields {
            update = match field {
                EventField::Name(v) => update.col_expr(Column::Name, Expr::value(v)),
                EventField::CategoryId(v) => update.col_expr(Column::CategoryId, Expr::value(v)),
                EventField::Location(v) => update.col_expr(Column::Location, Expr::value(v)),
                EventField::Date(v) => update.col_expr(Column::Date, Expr::value(v)),
            };
        }

        let result = update
            .filter(Column::Id.eq(patch.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
