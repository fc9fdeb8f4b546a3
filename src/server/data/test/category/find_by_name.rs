use super::*;

#[tokio::test]
async fn finds_category_by_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(EventCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let social = factory::create_category_named(db, "Social").await?;
    factory::create_category_named(db, "Brotherhood").await?;

    let found = CategoryRepository::new(db).find_by_name("Social").await?;

    assert_eq!(found.map(|c| c.id), Some(social.id));

    Ok(())
}

/// Tests looking up a name no category has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(EventCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category_named(db, "Social").await?;

    let found = CategoryRepository::new(db).find_by_name("Formal").await?;

    assert!(found.is_none());

    Ok(())
}
