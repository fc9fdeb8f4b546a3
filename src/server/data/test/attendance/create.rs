use super::*;

#[tokio::test]
async fn records_attendance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_category(db).await?;

    AttendanceRepository::new(db)
        .create(AttendanceParams {
            member_id: member.id,
            event_id: event.id,
            status: AttendanceStatus::Excused,
        })
        .await?;

    let stored = Attendance::find_by_id((member.id, event.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "Excused");

    Ok(())
}

/// Tests that one member has at most one row per event.
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_category(db).await?;
    factory::create_attendance(db, member.id, event.id, "Present").await?;

    let result = AttendanceRepository::new(db)
        .create(AttendanceParams {
            member_id: member.id,
            event_id: event.id,
            status: AttendanceStatus::Absent,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
