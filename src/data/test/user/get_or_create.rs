use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a profile for a member seen for the first time.
///
/// Expected: Ok with a level 1 profile holding no XP and no coins
#[tokio::test]
async fn creates_empty_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let profile = repo.get_or_create(42).await?;

    assert_eq!(profile.discord_id, 42);
    assert_eq!(profile.level, 1);
    assert_eq!(profile.xp, 0);
    assert_eq!(profile.coins, 0);
    assert!(profile.last_daily.is_none());

    Ok(())
}

/// Tests that an existing profile is returned unchanged and not duplicated.
///
/// Expected: Ok with stored values and a single row
#[tokio::test]
async fn returns_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("7")
        .level(4)
        .coins(300)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let profile = repo.get_or_create(7).await?;

    assert_eq!(profile.level, 4);
    assert_eq!(profile.coins, 300);

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a stored id which is not a number surfaces as an error.
///
/// Expected: Err
#[tokio::test]
async fn fails_on_corrupt_stored_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("not-a-number")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.top_by_level(10).await;

    assert!(result.is_err());

    Ok(())
}
