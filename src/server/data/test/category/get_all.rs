use super::*;

#[tokio::test]
async fn gets_all_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(EventCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category_named(db, "Social").await?;
    factory::create_category_named(db, "Brotherhood").await?;
    factory::create_category_named(db, "Professional").await?;

    let categories = CategoryRepository::new(db).get_all().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Brotherhood", "Professional", "Social"]);

    Ok(())
}
