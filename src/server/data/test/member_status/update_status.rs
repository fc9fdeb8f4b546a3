use super::*;

#[tokio::test]
async fn updates_status_label() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, semester, _) =
        factory::helpers::create_member_with_status(db, "Active").await?;

    let rows = MemberStatusRepository::new(db)
        .update_status(SetStatusParams {
            member_id: member.id,
            semester_id: semester.id,
            status: "Transferred".to_string(),
        })
        .await?;

    assert_eq!(rows, 1);
    let stored = MemberStatus::find_by_id((member.id, semester.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "Transferred");

    Ok(())
}

#[tokio::test]
async fn reports_zero_rows_for_missing_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let semester = factory::create_semester(db).await?;

    let rows = MemberStatusRepository::new(db)
        .update_status(SetStatusParams {
            member_id: member.id,
            semester_id: semester.id,
            status: "Active".to_string(),
        })
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
