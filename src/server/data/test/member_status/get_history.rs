use super::*;

/// Tests that a member's history lists every semester oldest first.
#[tokio::test]
async fn gets_history_for_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let fall = factory::create_semester_labeled(db, "Fall 2023").await?;
    let spring = factory::create_semester_labeled(db, "Spring 2024").await?;
    factory::create_member_status(db, member.id, spring.id, "Co-op").await?;
    factory::create_member_status(db, member.id, fall.id, "Active").await?;
    factory::create_member_status(db, other.id, fall.id, "Alumnus").await?;

    let history = MemberStatusRepository::new(db)
        .get_history(member.id)
        .await?;

    let lines: Vec<(&str, &str)> = history
        .iter()
        .map(|s| (s.semester_label.as_str(), s.status.as_str()))
        .collect();
    assert_eq!(lines, vec![("Fall 2023", "Active"), ("Spring 2024", "Co-op")]);

    Ok(())
}

#[tokio::test]
async fn gets_empty_history() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let history = MemberStatusRepository::new(db)
        .get_history(member.id)
        .await?;

    assert!(history.is_empty());

    Ok(())
}
