use super::*;

/// Tests listing members ordered by roll call.
///
/// Expected: Ok with members sorted ascending by roll call
#[tokio::test]
async fn gets_all_ordered_by_roll_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db).roll_call(30).build().await?;
    factory::member::MemberFactory::new(db).roll_call(10).build().await?;
    factory::member::MemberFactory::new(db).roll_call(20).build().await?;

    let members = MemberRepository::new(db).get_all().await?;

    let roll_calls: Vec<i32> = members.iter().map(|m| m.roll_call).collect();
    assert_eq!(roll_calls, vec![10, 20, 30]);

    Ok(())
}

#[tokio::test]
async fn gets_member_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;

    let member = MemberRepository::new(db).get_by_id(created.id).await?;

    assert_eq!(member.map(|m| m.roll_call), Some(created.roll_call));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = MemberRepository::new(db).get_by_id(999).await?;

    assert!(member.is_none());

    Ok(())
}

#[tokio::test]
async fn finds_member_by_roll_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .roll_call(77)
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert_eq!(
        repo.find_by_roll_call(77).await?.map(|m| m.id),
        Some(created.id)
    );
    assert!(repo.find_by_roll_call(78).await?.is_none());

    Ok(())
}
