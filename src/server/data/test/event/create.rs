use super::*;

#[tokio::test]
async fn creates_event_in_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category_named(db, "Social").await?;

    let event = EventRepository::new(db)
        .create(
            "Formal".to_string(),
            category.id,
            "Hall".to_string(),
            date(2024, 7, 27),
        )
        .await?;

    assert!(event.id > 0);
    assert_eq!(event.category_id, category.id);
    assert_eq!(event.date, date(2024, 7, 27));

    Ok(())
}
