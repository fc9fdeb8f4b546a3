use super::*;

/// Tests that only the patched columns change.
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let social = factory::create_category_named(db, "Social").await?;
    let professional = factory::create_category_named(db, "Professional").await?;
    let created = factory::create_event(db, social.id).await?;

    let rows = EventRepository::new(db)
        .update(EventPatch {
            id: created.id,
            fields: vec![
                EventField::CategoryId(professional.id),
                EventField::Date(date(2025, 1, 31)),
            ],
        })
        .await?;

    assert_eq!(rows, 1);

    let stored = Event::find_by_id(created.id).one(db).await?.unwrap();
    assert_eq!(stored.category_id, professional.id);
    assert_eq!(stored.date, date(2025, 1, 31));
    assert_eq!(stored.name, created.name);
    assert_eq!(stored.location, created.location);

    Ok(())
}

#[tokio::test]
async fn reports_zero_rows_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = EventRepository::new(db)
        .update(EventPatch {
            id: 7,
            fields: vec![EventField::Name("Ghost".to_string())],
        })
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
