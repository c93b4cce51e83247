use super::*;

/// Tests selecting rewards for a range of reached levels.
///
/// Expected: Ok with rewards inside the range, ascending
#[tokio::test]
async fn returns_rewards_in_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for level in [2, 5, 3, 8] {
        factory::create_level_reward(db, "1", level).await?;
    }
    factory::create_level_reward(db, "2", 4).await?;

    let repo = LevelRewardRepository::new(db);
    let levels: Vec<i32> = repo
        .get_for_levels(1, 3, 5)
        .await?
        .iter()
        .map(|r| r.level_required)
        .collect();

    assert_eq!(levels, vec![3, 5]);

    Ok(())
}
