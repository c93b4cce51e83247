use super::*;

/// Tests selecting giveaways that reached their end time.
///
/// Verifies that future and already closed giveaways are skipped.
///
/// Expected: Ok with only the expired active giveaway
#[tokio::test]
async fn returns_only_expired_active_giveaways() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let expired = factory::create_giveaway(db, now - Duration::minutes(1)).await?;
    factory::create_giveaway(db, now + Duration::minutes(5)).await?;
    factory::giveaway::GiveawayFactory::new(db)
        .end_time(now - Duration::minutes(10))
        .active(false)
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let due = repo.get_due(now).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, expired.id);

    Ok(())
}

/// Tests finding an active giveaway by its message.
///
/// Expected: Ok(Some) for the right guild and message
#[tokio::test]
async fn finds_by_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::giveaway::GiveawayFactory::new(db)
        .guild_id("5")
        .message_id("6")
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    assert!(repo.find_active_by_message(5, 6).await?.is_some());
    assert!(repo.find_active_by_message(4, 6).await?.is_none());

    Ok(())
}
