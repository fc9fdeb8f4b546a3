use super::*;

/// Tests that records come back joined to member, event and category.
#[tokio::test]
async fn gets_joined_records_for_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::member::MemberFactory::new(db)
        .roll_call(2)
        .first_name("Second")
        .build()
        .await?;
    let second = factory::member::MemberFactory::new(db)
        .roll_call(1)
        .first_name("First")
        .build()
        .await?;
    let category = factory::create_category_named(db, "Social").await?;
    let event = factory::event::EventFactory::new(db, category.id)
        .name("Formal")
        .location("Hall")
        .build()
        .await?;
    let other_event = factory::create_event(db, category.id).await?;

    factory::create_attendance(db, first.id, event.id, "Present").await?;
    factory::create_attendance(db, second.id, event.id, "Absent").await?;
    factory::create_attendance(db, first.id, other_event.id, "Excused").await?;

    let rows = AttendanceRepository::new(db).get_by_event(event.id).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].roll_call, 1);
    assert_eq!(rows[0].first_name, "First");
    assert_eq!(rows[0].status, "Absent");
    assert_eq!(rows[1].member_id, first.id);
    assert_eq!(rows[1].event_name, "Formal");
    assert_eq!(rows[1].event_location, "Hall");
    assert_eq!(rows[1].category_name, "Social");
    assert_eq!(rows[1].event_date, event.date);

    Ok(())
}

#[tokio::test]
async fn gets_empty_list_for_event_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_category(db).await?;

    let rows = AttendanceRepository::new(db).get_by_event(event.id).await?;

    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
async fn gets_all_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let category = factory::create_category(db).await?;
    let first = factory::create_event(db, category.id).await?;
    let second = factory::create_event(db, category.id).await?;
    factory::create_attendance(db, member.id, second.id, "Present").await?;
    factory::create_attendance(db, member.id, first.id, "Present").await?;

    let rows = AttendanceRepository::new(db).get_all().await?;

    let events: Vec<i32> = rows.iter().map(|r| r.event_id).collect();
    assert_eq!(events, vec![first.id, second.id]);

    Ok(())
}

#[tokio::test]
async fn gets_one_record_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_category(db).await?;
    factory::create_attendance(db, member.id, event.id, "Present").await?;

    let repo = AttendanceRepository::new(db);

    let row = repo.get_one(member.id, event.id).await?.unwrap();
    assert_eq!(row.roll_call, member.roll_call);
    assert!(repo.get_one(member.id, event.id + 1).await?.is_none());

    Ok(())
}

/// Tests the per-event roster lines joined to member names.
#[tokio::test]
async fn gets_event_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_category(db).await?;
    factory::create_attendance(db, member.id, event.id, "Excused").await?;

    let rows = AttendanceRepository::new(db)
        .get_event_roster(event.id)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].member_id, member.id);
    assert_eq!(rows[0].last_name, member.last_name);
    assert_eq!(rows[0].status, "Excused");

    Ok(())
}
