use super::*;

/// Tests creating a member with every field supplied.
///
/// Expected: Ok with generated id and all fields stored as given
#[tokio::test]
async fn creates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.create(create_params(12)).await?;

    assert!(member.id > 0);
    assert_eq!(member.roll_call, 12);
    assert_eq!(member.first_name, "Ada");
    assert_eq!(member.major.as_deref(), Some("Mathematics"));
    assert!(member.phone_number.is_none());

    let stored = Member::find_by_id(member.id).one(db).await?.unwrap();
    assert_eq!(stored.email.as_deref(), Some("ada@example.edu"));

    Ok(())
}

/// Tests that roll call numbers are unique.
///
/// Expected: Err(DbErr) for the second insert
#[tokio::test]
async fn rejects_duplicate_roll_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(create_params(12)).await?;
    let result = repo.create(create_params(12)).await;

    assert!(result.is_err());

    Ok(())
}
