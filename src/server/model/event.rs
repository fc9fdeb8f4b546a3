//! Event domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::event::{CreateEventDto, EventDto, EventPatchDto, EventRosterDto},
    server::{
        error::{internal::InternalError, AppError},
        model::attendance::EventAttendance,
    },
};

/// Chapter event with its category resolved to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub category_name: String,
    pub location: String,
    pub date: NaiveDate,
}

impl Event {
    /// Converts an event entity and its related category at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Event)` - Event with category name
    /// - `Err(AppError::InternalErr(MissingCategory))` - The category row was not loaded
    pub fn from_entity(
        entity: entity::event::Model,
        category: Option<entity::event_category::Model>,
    ) -> Result<Self, AppError> {
        let category = category.ok_or(InternalError::MissingCategory {
            event_id: entity.id,
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            category_name: category.name,
            location: entity.location,
            date: entity.date,
        })
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            event_id: self.id,
            event_name: self.name,
            category_name: self.category_name,
            event_location: self.location,
            event_date: self.date,
        }
    }
}

/// Parameters for creating a new event; the category is named, not referenced by id.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub name: String,
    pub category_name: String,
    pub location: String,
    pub date: NaiveDate,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            name: dto.event_name,
            category_name: dto.category_name,
            location: dto.event_location,
            date: dto.event_date,
        }
    }
}

/// Requested event changes before the category name is resolved.
#[derive(Debug, Clone)]
pub struct UpdateEventParams {
    pub id: i32,
    pub name: Option<String>,
    pub category_name: Option<String>,
    pub location: Option<String>,
    pub date: Option<NaiveDate>,
}

impl UpdateEventParams {
    pub fn from_dto(id: i32, dto: EventPatchDto) -> Self {
        Self {
            id,
            name: dto.event_name,
            category_name: dto.category_name,
            location: dto.event_location,
            date: dto.event_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category_name.is_none()
            && self.location.is_none()
            && self.date.is_none()
    }
}

/// One updatable event column together with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum EventField {
    Name(String),
    CategoryId(i32),
    Location(String),
    Date(NaiveDate),
}

/// Sparse update over the event allow-list, with the category already resolved.
#[derive(Debug, Clone)]
pub struct EventPatch {
    pub id: i32,
    pub fields: Vec<EventField>,
}

/// An event together with everyone recorded against it.
#[derive(Debug, Clone)]
pub struct EventRoster {
    pub event: Event,
    pub attendance: Vec<EventAttendance>,
}

impl EventRoster {
    pub fn into_dto(self) -> EventRosterDto {
        EventRosterDto {
            event: self.event.into_dto(),
            attendance: self
                .attendance
                .into_iter()
                .map(EventAttendance::into_dto)
                .collect(),
        }
    }
}
