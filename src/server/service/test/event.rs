use super::*;
use crate::server::{
    model::event::{CreateEventParams, UpdateEventParams},
    service::event::EventService,
};
use chrono::NaiveDate;
use entity::prelude::*;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

fn patch(id: i32) -> UpdateEventParams {
    UpdateEventParams {
        id,
        name: None,
        category_name: None,
        location: None,
        date: None,
    }
}

/// Tests creating an event and reading it back by its generated id.
#[tokio::test]
async fn created_event_round_trips() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_category_named(db, "Social").await?;

    let service = EventService::new(db, TIMEOUT);
    let created = service
        .create(CreateEventParams {
            name: "Formal".to_string(),
            category_name: "Social".to_string(),
            location: "Hall".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 27).unwrap(),
        })
        .await?;

    let fetched = service.get_by_id(created.id).await?;

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Formal");
    assert_eq!(fetched.category_name, "Social");
    assert_eq!(fetched.location, "Hall");

    Ok(())
}

#[tokio::test]
async fn create_with_unknown_category_inserts_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventService::new(db, TIMEOUT)
        .create(CreateEventParams {
            name: "Formal".to_string(),
            category_name: "Gala".to_string(),
            location: "Hall".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 27).unwrap(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(Event::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that an unknown category name fails the whole update.
///
/// Expected: Err(NotFound) and neither the category nor the other patched fields change
#[tokio::test]
async fn update_with_unknown_category_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, created) = factory::helpers::create_event_with_category(db).await?;

    let mut params = patch(created.id);
    params.name = Some("Renamed".to_string());
    params.category_name = Some("Nonexistent".to_string());

    let result = EventService::new(db, TIMEOUT).update(params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let stored = Event::find_by_id(created.id).one(db).await?.unwrap();
    assert_eq!(stored.category_id, category.id);
    assert_eq!(stored.name, created.name);

    Ok(())
}

#[tokio::test]
async fn update_repoints_category_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created) = factory::helpers::create_event_with_category(db).await?;
    factory::create_category_named(db, "Professional").await?;

    let mut params = patch(created.id);
    params.category_name = Some("Professional".to_string());

    let updated = EventService::new(db, TIMEOUT).update(params).await?;

    assert_eq!(updated.category_name, "Professional");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.date, created.date);

    Ok(())
}

#[tokio::test]
async fn rejects_empty_patch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created) = factory::helpers::create_event_with_category(db).await?;

    let result = EventService::new(db, TIMEOUT).update(patch(created.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

#[tokio::test]
async fn update_of_unknown_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = patch(99);
    params.location = Some("Library".to_string());

    let result = EventService::new(db, TIMEOUT).update(params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
