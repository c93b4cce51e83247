use super::*;

/// Tests a transfer between two members.
///
/// Verifies that the amount leaves the sender and reaches the receiver with the
/// combined balance unchanged.
///
/// Expected: Ok(Some) with both balances updated
#[tokio::test]
async fn moves_coins_between_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user_with_coins(db, 500).await?;
    let receiver = factory::create_user_with_coins(db, 20).await?;
    let sender_id: u64 = sender.discord_id.parse().unwrap();
    let receiver_id: u64 = receiver.discord_id.parse().unwrap();

    let repo = UserRepository::new(db);
    let transfer = repo.transfer(sender_id, receiver_id, 150).await?.unwrap();

    assert_eq!(transfer.sender.coins, 350);
    assert_eq!(transfer.receiver.coins, 170);
    assert_eq!(transfer.sender.coins + transfer.receiver.coins, 520);

    let stored = repo.find_by_discord_id(receiver_id).await?.unwrap();
    assert_eq!(stored.coins, 170);

    Ok(())
}

/// Tests that an insufficient balance leaves both members untouched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn refuses_when_balance_is_too_low() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user_with_coins(db, 10).await?;
    let receiver = factory::create_user(db).await?;
    let sender_id: u64 = sender.discord_id.parse().unwrap();
    let receiver_id: u64 = receiver.discord_id.parse().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.transfer(sender_id, receiver_id, 11).await?;

    assert!(result.is_none());
    assert_eq!(repo.find_by_discord_id(sender_id).await?.unwrap().coins, 10);
    assert_eq!(repo.find_by_discord_id(receiver_id).await?.unwrap().coins, 0);

    Ok(())
}

/// Tests transferring to a member without a profile.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_receiver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user_with_coins(db, 100).await?;
    let sender_id: u64 = sender.discord_id.parse().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.transfer(sender_id, 999, 50).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(repo.find_by_discord_id(sender_id).await?.unwrap().coins, 100);

    Ok(())
}
