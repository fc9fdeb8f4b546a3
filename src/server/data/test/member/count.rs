use super::*;

#[tokio::test]
async fn counts_all_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    assert_eq!(repo.count(None).await?, 0);

    factory::member::MemberFactory::new(db).status("Active").build().await?;
    factory::member::MemberFactory::new(db).status("Active").build().await?;
    factory::member::MemberFactory::new(db).status("Alumnus").build().await?;

    assert_eq!(repo.count(None).await?, 3);

    Ok(())
}

#[tokio::test]
async fn counts_members_with_status_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db).status("Active").build().await?;
    factory::member::MemberFactory::new(db).status("Alumnus").build().await?;

    let repo = MemberRepository::new(db);
    assert_eq!(repo.count(Some("Alumnus")).await?, 1);
    assert_eq!(repo.count(Some("Co-op")).await?, 0);

    Ok(())
}

/// Tests that members without a major are left out of the major breakdown.
#[tokio::test]
async fn counts_members_by_major() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .major(Some("Physics"))
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .major(Some("Physics"))
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .major(Some("Biology"))
        .build()
        .await?;
    factory::member::MemberFactory::new(db).major(None).build().await?;

    let counts = MemberRepository::new(db).count_by_major().await?;

    let pairs: Vec<(&str, i64)> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
    assert_eq!(pairs, vec![("Biology", 1), ("Physics", 2)]);

    Ok(())
}
