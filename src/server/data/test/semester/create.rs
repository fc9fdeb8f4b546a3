use super::*;

#[tokio::test]
async fn creates_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Semester).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = SemesterRepository::new(db)
        .create("Fall 2023".to_string())
        .await?;

    assert!(semester.id > 0);
    assert_eq!(semester.label, "Fall 2023");

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_label() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Semester).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_semester_labeled(db, "Fall 2023").await?;
    let result = SemesterRepository::new(db)
        .create("Fall 2023".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
