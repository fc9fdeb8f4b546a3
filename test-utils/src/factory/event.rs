//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, category.id)
///     .name("Formal")
///     .location("Hall")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::event::Model,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory for the given category with fixture defaults.
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let entity = fixture::event::entity_builder()
            .name(format!("Event {}", next_id()))
            .category_id(category_id)
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.entity.location = location.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.entity.date = date;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let entity = self.entity;
        entity::event::ActiveModel {
            name: ActiveValue::Set(entity.name),
            category_id: ActiveValue::Set(entity.category_id),
            location: ActiveValue::Set(entity.location),
            date: ActiveValue::Set(entity.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event in the given category with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, category_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_event_in_category() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_event_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let category = crate::factory::create_category(db).await?;
        let event = create_event(db, category.id).await?;

        assert_eq!(event.category_id, category.id);
        assert_eq!(event.location, fixture::event::DEFAULT_LOCATION);
        assert_eq!(event.date, fixture::event::default_date());

        Ok(())
    }
}
