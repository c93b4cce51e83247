use super::*;

/// Tests spending exactly the whole balance.
///
/// Expected: Ok(Some) with zero coins left
#[tokio::test]
async fn spends_entire_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_coins(db, 250).await?;
    let user_id: u64 = user.discord_id.parse().unwrap();

    let repo = UserRepository::new(db);
    let profile = repo.try_spend(user_id, 250).await?.unwrap();

    assert_eq!(profile.coins, 0);

    Ok(())
}

/// Tests that spending more than the balance changes nothing.
///
/// Expected: Ok(None) and the balance intact
#[tokio::test]
async fn refuses_overspending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_coins(db, 99).await?;
    let user_id: u64 = user.discord_id.parse().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.try_spend(user_id, 100).await?.is_none());
    assert_eq!(repo.find_by_discord_id(user_id).await?.unwrap().coins, 99);

    Ok(())
}

/// Tests adding and removing coins.
///
/// Expected: Ok with the adjusted balance
#[tokio::test]
async fn adjusts_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_coins(db, 40).await?;
    let user_id: u64 = user.discord_id.parse().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.add_coins(user_id, 60).await?.coins, 100);
    assert_eq!(repo.add_coins(user_id, -30).await?.coins, 70);

    Ok(())
}
