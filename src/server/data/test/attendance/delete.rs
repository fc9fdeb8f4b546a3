use super::*;

#[tokio::test]
async fn deletes_attendance_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_category(db).await?;
    factory::create_attendance(db, member.id, event.id, "Present").await?;

    let rows = AttendanceRepository::new(db)
        .delete(member.id, event.id)
        .await?;

    assert_eq!(rows, 1);
    assert!(Attendance::find().all(db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn deleting_missing_pair_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = AttendanceRepository::new(db).delete(1, 2).await?;

    assert_eq!(rows, 0);

    Ok(())
}
