use super::*;

#[tokio::test]
async fn updates_status_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_category(db).await?;
    factory::create_attendance(db, member.id, event.id, "Absent").await?;

    let rows = AttendanceRepository::new(db)
        .update_status(AttendanceParams {
            member_id: member.id,
            event_id: event.id,
            status: AttendanceStatus::Present,
        })
        .await?;

    assert_eq!(rows, 1);
    let stored = Attendance::find_by_id((member.id, event.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "Present");

    Ok(())
}

/// Tests updating a pair that has no row.
///
/// Expected: Ok(0) and nothing inserted
#[tokio::test]
async fn reports_zero_rows_for_missing_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_category(db).await?;

    let rows = AttendanceRepository::new(db)
        .update_status(AttendanceParams {
            member_id: member.id,
            event_id: event.id,
            status: AttendanceStatus::Present,
        })
        .await?;

    assert_eq!(rows, 0);
    assert!(Attendance::find().all(db).await?.is_empty());

    Ok(())
}
