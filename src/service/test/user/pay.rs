use super::*;

/// Tests that paying keeps the combined balance constant.
///
/// Expected: Ok with the receiver credited and the sender debited
#[tokio::test]
async fn pay_is_zero_sum() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .coins(1000)
        .build()
        .await?;

    let service = UserService::new(db);
    for amount in [1, 250, 749] {
        let transfer = service.pay(1, 2, amount).await?;
        assert_eq!(transfer.sender.coins + transfer.receiver.coins, 1000);
    }

    assert_eq!(service.profile(1).await?.coins, 0);
    assert_eq!(service.profile(2).await?.coins, 1000);

    Ok(())
}

/// Tests the validation rules of `/pay`.
///
/// Expected: Err(BadRequest) for self-payment, non-positive amounts and overdrafts
#[tokio::test]
async fn rejects_invalid_payments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .coins(100)
        .build()
        .await?;

    let service = UserService::new(db);

    assert!(matches!(service.pay(1, 1, 10).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.pay(1, 2, 0).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.pay(1, 2, -5).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.pay(1, 2, 101).await, Err(AppError::BadRequest(_))));

    assert_eq!(service.profile(1).await?.coins, 100);

    Ok(())
}
