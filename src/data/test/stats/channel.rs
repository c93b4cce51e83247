use super::*;

/// Tests that guild listings only show that guild's channels.
///
/// Expected: Ok with the created channel and none of the other guild's
#[tokio::test]
async fn lists_channels_per_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StatChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_stat_channel(db, "99").await?;

    let repo = StatChannelRepository::new(db);
    let created = repo
        .create(1, 10, StatKind::Online, "🟢 Online: {count}")
        .await?;

    let channels = repo.get_for_guild(1).await?;
    assert_eq!(channels, vec![created]);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}

/// Tests removing a statistics channel by its Discord id.
///
/// Expected: Ok(true) for a tracked channel, Ok(false) afterwards
#[tokio::test]
async fn deletes_by_channel_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StatChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::create_stat_channel(db, "5").await?;
    let channel_id: u64 = channel.channel_id.parse().unwrap();

    let repo = StatChannelRepository::new(db);
    assert!(repo.delete_by_channel(channel_id).await?);
    assert!(!repo.delete_by_channel(channel_id).await?);
    assert!(repo.get_for_guild(5).await?.is_empty());

    Ok(())
}
