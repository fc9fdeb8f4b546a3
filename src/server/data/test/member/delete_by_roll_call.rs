use super::*;

#[tokio::test]
async fn deletes_member_by_roll_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .roll_call(5)
        .build()
        .await?;

    let rows = MemberRepository::new(db).delete_by_roll_call(5).await?;

    assert_eq!(rows, 1);
    assert!(Member::find_by_id(created.id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a roll call nobody holds.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_unknown_roll_call_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db).await?;

    let rows = MemberRepository::new(db).delete_by_roll_call(-1).await?;

    assert_eq!(rows, 0);
    assert_eq!(Member::find().all(db).await?.len(), 1);

    Ok(())
}
