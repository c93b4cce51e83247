use crate::{error::AppError, service::{level_reward::LevelRewardService, user::UserService}};
use test_utils::{builder::TestBuilder, factory};

/// Tests selecting the rewards unlocked by a multi-level gain.
///
/// Expected: Ok with rewards for every reached level and none below or above
#[tokio::test]
async fn unlocks_rewards_for_each_reached_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for level in [2, 3, 4, 5] {
        factory::level_reward::create_level_reward_with_role(db, "10", level, format!("{}", level * 100))
            .await?;
    }

    let gain = UserService::new(db).add_xp(1, 650).await?;
    let rewards = LevelRewardService::new(db).unlocked_by(10, &gain).await?;
    let roles: Vec<u64> = rewards.iter().map(|r| r.role_id).collect();

    assert_eq!(roles, vec![200, 300, 400]);

    Ok(())
}

/// Tests that a gain without level-up unlocks nothing.
///
/// Expected: Ok with no rewards
#[tokio::test]
async fn no_rewards_without_level_up() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_level_reward(db, "10", 1).await?;

    let gain = UserService::new(db).add_xp(1, 10).await?;
    let rewards = LevelRewardService::new(db).unlocked_by(10, &gain).await?;

    assert!(rewards.is_empty());

    Ok(())
}

/// Tests reward management validation.
///
/// Expected: Err(BadRequest) for level 1, Err(NotFound) when removing a missing reward
#[tokio::test]
async fn validates_reward_management() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LevelRewardService::new(db);

    assert!(matches!(service.set(1, 1, 5).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.remove(1, 3).await, Err(AppError::NotFound(_))));

    service.set(1, 3, 5).await?;
    service.remove(1, 3).await?;
    assert!(service.list(1).await?.is_empty());

    Ok(())
}
