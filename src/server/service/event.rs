use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    data::{attendance::AttendanceRepository, event::EventRepository},
    error::AppError,
    model::{
        attendance::EventAttendance,
        event::{CreateEventParams, Event, EventField, EventPatch, EventRoster, UpdateEventParams},
    },
    service::category::CategoryService,
    util::{deadline::with_deadline, parse::require_text},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);

        let rows = with_deadline(self.timeout, repo.get_all()).await?;

        rows.into_iter()
            .map(|(event, category)| Event::from_entity(event, category))
            .collect()
    }

    /// Gets an event by id
    ///
    /// # Returns
    /// - `Ok(Event)`: Event with its category name
    /// - `Err(AppError::NotFound)`: No event with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        let (event, category) = with_deadline(self.timeout, repo.get_by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;

        Event::from_entity(event, category)
    }

    /// Creates an event in a named category
    ///
    /// The category is resolved first; an unknown name fails with 404 before anything
    /// is inserted.
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        let name = require_text("eventName", params.name)?;
        let location = require_text("eventLocation", params.location)?;

        let category = CategoryService::new(self.db, self.timeout)
            .resolve(&params.category_name)
            .await?;

        let repo = EventRepository::new(self.db);
        let event = with_deadline(
            self.timeout,
            repo.create(name, category.id, location, params.date),
        )
        .await?;

        tracing::info!("Created event {} in category '{}'", event.id, category.name);

        Ok(Event {
            id: event.id,
            name: event.name,
            category_name: category.name,
            location: event.location,
            date: event.date,
        })
    }

    /// Applies a partial update and returns the stored event
    ///
    /// A category name is resolved before the update statement runs, so an unknown
    /// category leaves the event untouched.
    ///
    /// # Returns
    /// - `Ok(Event)`: Event after the update
    /// - `Err(AppError::BadRequest)`: Empty patch or blank text field
    /// - `Err(AppError::NotFound)`: Unknown category name or event id
    pub async fn update(&self, params: UpdateEventParams) -> Result<Event, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest(
                "Request body contains no updatable event fields".to_string(),
            ));
        }

        let mut fields = Vec::new();
        if let Some(name) = params.name {
            fields.push(EventField::Name(require_text("eventName", name)?));
        }
        if let Some(category_name) = params.category_name {
            let category = CategoryService::new(self.db, self.timeout)
                .resolve(&category_name)
                .await?;
            fields.push(EventField::CategoryId(category.id));
        }
        if let Some(location) = params.location {
            fields.push(EventField::Location(require_text("eventLocation", location)?));
        }
        if let Some(date) = params.date {
            fields.push(EventField::Date(date));
        }

        let repo = EventRepository::new(self.db);
        let rows = with_deadline(
            self.timeout,
            repo.update(EventPatch {
                id: params.id,
                fields,
            }),
        )
        .await?;

        if rows == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", params.id)));
        }

        self.get_by_id(params.id).await
    }

    /// Gets an event together with everyone recorded against it
    pub async fn get_roster(&self, id: i32) -> Result<EventRoster, AppError> {
        let event = self.get_by_id(id).await?;

        let repo = AttendanceRepository::new(self.db);
        let rows = with_deadline(self.timeout, repo.get_event_roster(id)).await?;

        let attendance = rows
            .into_iter()
            .map(EventAttendance::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EventRoster { event, attendance })
    }
}
