use super::*;

#[tokio::test]
async fn deletes_status_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, semester, _) =
        factory::helpers::create_member_with_status(db, "Active").await?;

    let rows = MemberStatusRepository::new(db)
        .delete(member.id, semester.id)
        .await?;

    assert_eq!(rows, 1);
    assert!(MemberStatus::find().all(db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn deleting_missing_row_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = MemberStatusRepository::new(db).delete(3, 4).await?;

    assert_eq!(rows, 0);

    Ok(())
}
