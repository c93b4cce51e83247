use super::*;

/// Tests the bio length limit.
///
/// Expected: Ok at 200 characters, Err(BadRequest) at 201
#[tokio::test]
async fn limits_bio_length() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    let profile = service.set_bio(1, &"é".repeat(200)).await?;
    assert_eq!(profile.bio.map(|b| b.chars().count()), Some(200));

    let result = service.set_bio(1, &"x".repeat(201)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let profile = service.set_bio(1, "   ").await?;
    assert!(profile.bio.is_none());

    Ok(())
}
