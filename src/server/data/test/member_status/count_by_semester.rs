use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let a = factory::create_member(db).await?;
    let b = factory::create_member(db).await?;
    let fall = factory::create_semester_labeled(db, "Fall 2023").await?;
    let spring = factory::create_semester_labeled(db, "Spring 2024").await?;
    factory::create_member_status(db, a.id, fall.id, "Active").await?;
    factory::create_member_status(db, b.id, fall.id, "Active").await?;
    factory::create_member_status(db, a.id, spring.id, "Active").await?;
    factory::create_member_status(db, b.id, spring.id, "Co-op").await?;
    Ok(())
}

fn pairs(counts: &[crate::server::model::count::LabelCount]) -> Vec<(&str, i64)> {
    counts.iter().map(|c| (c.label.as_str(), c.count)).collect()
}

#[tokio::test]
async fn counts_rows_per_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let counts = MemberStatusRepository::new(db)
        .count_by_semester(None, None)
        .await?;

    assert_eq!(pairs(&counts), vec![("Fall 2023", 2), ("Spring 2024", 2)]);

    Ok(())
}

#[tokio::test]
async fn counts_with_status_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let counts = MemberStatusRepository::new(db)
        .count_by_semester(Some("Active"), None)
        .await?;

    assert_eq!(pairs(&counts), vec![("Fall 2023", 2), ("Spring 2024", 1)]);

    Ok(())
}

#[tokio::test]
async fn counts_with_both_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let counts = MemberStatusRepository::new(db)
        .count_by_semester(Some("Co-op"), Some("Spring 2024"))
        .await?;

    assert_eq!(pairs(&counts), vec![("Spring 2024", 1)]);

    Ok(())
}
