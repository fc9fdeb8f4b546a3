use super::*;

#[tokio::test]
async fn gets_all_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Semester).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_semester_labeled(db, "Spring 2024").await?;
    factory::create_semester_labeled(db, "Fall 2023").await?;

    let semesters = SemesterRepository::new(db).get_all().await?;

    let labels: Vec<&str> = semesters.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Spring 2024", "Fall 2023"]);

    Ok(())
}

#[tokio::test]
async fn finds_semester_by_label_and_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Semester).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_semester_labeled(db, "Fall 2023").await?;
    let repo = SemesterRepository::new(db);

    assert_eq!(
        repo.find_by_label("Fall 2023").await?.map(|s| s.id),
        Some(created.id)
    );
    assert_eq!(
        repo.get_by_id(created.id).await?.map(|s| s.label),
        Some("Fall 2023".to_string())
    );
    assert!(repo.find_by_label("Fall 2099").await?.is_none());

    Ok(())
}
