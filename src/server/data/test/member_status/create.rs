use super::*;

#[tokio::test]
async fn creates_status_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let semester = factory::create_semester_labeled(db, "Fall 2023").await?;
    let repo = MemberStatusRepository::new(db);

    repo.create(SetStatusParams {
        member_id: member.id,
        semester_id: semester.id,
        status: "Co-op".to_string(),
    })
    .await?;

    let row = repo.get_one(member.id, semester.id).await?.unwrap();
    assert_eq!(row.status, "Co-op");
    assert_eq!(row.semester_label, "Fall 2023");

    Ok(())
}

/// Tests that a member has at most one status per semester.
#[tokio::test]
async fn rejects_second_status_for_same_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, semester, _) =
        factory::helpers::create_member_with_status(db, "Active").await?;

    let result = MemberStatusRepository::new(db)
        .create(SetStatusParams {
            member_id: member.id,
            semester_id: semester.id,
            status: "Inactive".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
