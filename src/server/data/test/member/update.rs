use super::*;

/// Tests that a patch writes only the supplied columns.
///
/// Expected: changed fields updated, every other field untouched
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;

    let rows = MemberRepository::new(db)
        .update(UpdateMemberParams {
            id: created.id,
            fields: vec![
                MemberField::LastName("Hopper".to_string()),
                MemberField::Email(Some("grace@example.edu".to_string())),
            ],
        })
        .await?;

    assert_eq!(rows, 1);

    let stored = Member::find_by_id(created.id).one(db).await?.unwrap();
    assert_eq!(stored.last_name, "Hopper");
    assert_eq!(stored.email.as_deref(), Some("grace@example.edu"));
    assert_eq!(stored.first_name, created.first_name);
    assert_eq!(stored.major, created.major);
    assert_eq!(stored.status, created.status);
    assert_eq!(stored.roll_call, created.roll_call);

    Ok(())
}

/// Tests clearing a nullable column with an explicit null.
#[tokio::test]
async fn clears_nullable_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;
    assert!(created.major.is_some());

    MemberRepository::new(db)
        .update(UpdateMemberParams {
            id: created.id,
            fields: vec![MemberField::Major(None)],
        })
        .await?;

    let stored = Member::find_by_id(created.id).one(db).await?.unwrap();
    assert!(stored.major.is_none());

    Ok(())
}

/// Tests that applying the same patch twice leaves the same state.
#[tokio::test]
async fn repeated_patch_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;
    let repo = MemberRepository::new(db);
    let patch = UpdateMemberParams {
        id: created.id,
        fields: vec![MemberField::BadStanding(1)],
    };

    repo.update(patch.clone()).await?;
    let first = Member::find_by_id(created.id).one(db).await?.unwrap();
    repo.update(patch).await?;
    let second = Member::find_by_id(created.id).one(db).await?.unwrap();

    assert_eq!(first, second);
    assert_eq!(second.bad_standing, 1);

    Ok(())
}

#[tokio::test]
async fn reports_zero_rows_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = MemberRepository::new(db)
        .update(UpdateMemberParams {
            id: 404,
            fields: vec![MemberField::FirstName("Nobody".to_string())],
        })
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
