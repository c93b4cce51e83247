use super::*;

/// Tests the level ranking order.
///
/// Verifies that members are sorted by level and then by XP inside the level.
///
/// Expected: Ok with members in descending order
#[tokio::test]
async fn orders_by_level_then_xp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .level(2)
        .xp(10)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("2")
        .level(5)
        .xp(0)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("3")
        .level(2)
        .xp(90)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let ranking = repo.top_by_level(10).await?;
    let ids: Vec<u64> = ranking.iter().map(|u| u.discord_id).collect();

    assert_eq!(ids, vec![2, 3, 1]);

    let ranking = repo.top_by_level(2).await?;
    assert_eq!(ranking.len(), 2);

    Ok(())
}

/// Tests the richest ranking.
///
/// Verifies that members with an empty wallet are left out.
///
/// Expected: Ok with only members holding coins
#[tokio::test]
async fn richest_skips_empty_wallets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("10")
        .coins(5)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("11")
        .coins(0)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("12")
        .coins(900)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let ids: Vec<u64> = repo
        .top_by_coins(10)
        .await?
        .iter()
        .map(|u| u.discord_id)
        .collect();

    assert_eq!(ids, vec![12, 10]);

    Ok(())
}
