//! Event fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::event;

/// Default event name.
pub const DEFAULT_NAME: &str = "Chapter Meeting";

/// Default event location.
pub const DEFAULT_LOCATION: &str = "Student Union";

/// Default category ID.
pub const DEFAULT_CATEGORY_ID: i32 = 1;

/// Default event date, 2024-07-27.
pub fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 27).unwrap_or_default()
}

/// Creates an event entity model with default values.
pub fn entity() -> event::Model {
    entity_builder().build()
}

/// Creates an event entity builder for customization.
pub fn entity_builder() -> EventEntityBuilder {
    EventEntityBuilder::default()
}

/// Builder for creating customized event entity models.
pub struct EventEntityBuilder {
    id: i32,
    name: String,
    category_id: i32,
    location: String,
    date: NaiveDate,
}

impl Default for EventEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            category_id: DEFAULT_CATEGORY_ID,
            location: DEFAULT_LOCATION.to_string(),
            date: default_date(),
        }
    }
}

impl EventEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Builds and returns the event entity model.
    pub fn build(self) -> event::Model {
        event::Model {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
            location: self.location,
            date: self.date,
        }
    }
}
