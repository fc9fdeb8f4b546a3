use super::*;

/// Tests the semester roster joined across member, status and semester.
#[tokio::test]
async fn gets_roster_for_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let late = factory::member::MemberFactory::new(db)
        .roll_call(9)
        .major(None)
        .build()
        .await?;
    let early = factory::member::MemberFactory::new(db)
        .roll_call(3)
        .build()
        .await?;
    let fall = factory::create_semester_labeled(db, "Fall 2023").await?;
    let spring = factory::create_semester_labeled(db, "Spring 2024").await?;
    factory::create_member_status(db, late.id, fall.id, "Active").await?;
    factory::create_member_status(db, early.id, fall.id, "Co-op").await?;
    factory::create_member_status(db, early.id, spring.id, "Active").await?;

    let roster = MemberStatusRepository::new(db)
        .get_roster(fall.id, None)
        .await?;

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].member_id, early.id);
    assert_eq!(roster[0].status, "Co-op");
    assert_eq!(roster[0].semester_label, "Fall 2023");
    assert_eq!(roster[0].major, early.major);
    assert_eq!(roster[1].roll_call, 9);
    assert!(roster[1].major.is_none());

    Ok(())
}

#[tokio::test]
async fn filters_roster_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_member(db).await?;
    let coop = factory::create_member(db).await?;
    let semester = factory::create_semester(db).await?;
    factory::create_member_status(db, active.id, semester.id, "Active").await?;
    factory::create_member_status(db, coop.id, semester.id, "Co-op").await?;

    let roster = MemberStatusRepository::new(db)
        .get_roster(semester.id, Some("Co-op"))
        .await?;

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].member_id, coop.id);

    Ok(())
}
