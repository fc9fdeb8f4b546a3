use super::*;

#[tokio::test]
async fn gets_event_with_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category_named(db, "Brotherhood").await?;
    let created = factory::create_event(db, category.id).await?;

    let result = EventRepository::new(db).get_by_id(created.id).await?;

    let (event, related) = result.unwrap();
    assert_eq!(event.id, created.id);
    assert_eq!(related.map(|c| c.name), Some("Brotherhood".to_string()));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());
    assert!(!repo.exists(42).await?);

    Ok(())
}

/// Tests listing events, most recent date first.
#[tokio::test]
async fn gets_all_most_recent_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::event::EventFactory::new(db, category.id)
        .name("Older")
        .date(date(2024, 1, 10))
        .build()
        .await?;
    factory::event::EventFactory::new(db, category.id)
        .name("Newer")
        .date(date(2024, 3, 5))
        .build()
        .await?;

    let events = EventRepository::new(db).get_all().await?;

    let names: Vec<&str> = events.iter().map(|(e, _)| e.name.as_str()).collect();
    assert_eq!(names, vec!["Newer", "Older"]);
    assert!(events.iter().all(|(_, c)| c.is_some()));

    Ok(())
}
