use super::*;

#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(EventCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryRepository::new(db)
        .create("Philanthropy".to_string())
        .await?;

    assert!(category.id > 0);
    assert_eq!(category.name, "Philanthropy");

    Ok(())
}

/// Tests that category names are unique.
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(EventCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category_named(db, "Social").await?;
    let result = CategoryRepository::new(db).create("Social".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
