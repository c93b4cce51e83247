use super::*;

/// Tests winning and losing a coin flip.
///
/// Expected: Ok with the stake added on a win and removed on a loss
#[tokio::test]
async fn coinflip_moves_the_stake() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("5")
        .coins(100)
        .build()
        .await?;

    let service = UserService::new(db);

    let outcome = service.coinflip(5, 40, true).await?;
    assert!(outcome.won());
    assert_eq!(outcome.balance, 140);

    let outcome = service.coinflip(5, 140, false).await?;
    assert!(!outcome.won());
    assert_eq!(outcome.balance, 0);

    Ok(())
}

/// Tests dice payouts.
///
/// Expected: Ok with half the stake won on 4 to 6 and the stake lost on 1 to 3
#[tokio::test]
async fn dice_pays_half_the_stake() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("6")
        .coins(100)
        .build()
        .await?;

    let service = UserService::new(db);

    assert_eq!(service.dice(6, 50, 5).await?.balance, 125);
    assert_eq!(service.dice(6, 25, 2).await?.balance, 100);

    Ok(())
}

/// Tests bet validation.
///
/// Expected: Err(BadRequest) below the minimum bet or above the balance
#[tokio::test]
async fn rejects_invalid_bets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("7")
        .coins(50)
        .build()
        .await?;

    let service = UserService::new(db);

    assert!(matches!(service.coinflip(7, 9, true).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.dice(7, 51, 6).await, Err(AppError::BadRequest(_))));
    assert_eq!(service.profile(7).await?.coins, 50);

    Ok(())
}
