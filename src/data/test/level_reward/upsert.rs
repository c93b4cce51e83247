use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that setting a reward twice for the same level replaces the role.
///
/// Expected: Ok with one row holding the latest role
#[tokio::test]
async fn replaces_existing_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelRewardRepository::new(db);
    repo.upsert(1, 5, 100).await?;
    let reward = repo.upsert(1, 5, 200).await?;

    assert_eq!(reward.role_id, 200);
    assert_eq!(entity::prelude::LevelReward::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the same level in another guild is a separate reward.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn levels_are_scoped_by_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelRewardRepository::new(db);
    repo.upsert(1, 5, 100).await?;
    repo.upsert(2, 5, 100).await?;

    assert_eq!(repo.get_by_guild(1).await?.len(), 1);
    assert_eq!(repo.get_by_guild(2).await?.len(), 1);

    Ok(())
}

/// Tests deleting a reward.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_reward() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_level_reward(db, "1", 10).await?;

    let repo = LevelRewardRepository::new(db);
    assert!(repo.delete(1, 10).await?);
    assert!(!repo.delete(1, 10).await?);

    Ok(())
}
