use super::*;

/// Tests configuring the announcement channel twice.
///
/// Expected: one row per guild, the second call replacing channel and role but keeping the last game
#[tokio::test]
async fn set_channel_updates_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationConfigRepository::new(db);
    let first = repo.set_channel(1, 10, Some(20)).await?;
    assert!(repo.set_last_game(1, "4821").await?);

    let second = repo.set_channel(1, 11, None).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.free_games_channel_id, Some(11));
    assert_eq!(second.mention_role_id, None);
    assert_eq!(second.last_game_id.as_deref(), Some("4821"));

    Ok(())
}

/// Tests that guilds without a channel are left out of the announcement run.
///
/// Expected: only the configured guild is returned
#[tokio::test]
async fn lists_guilds_with_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_notification_config(db, "1", true, None).await?;
    factory::create_notification_config(db, "2", false, Some("77")).await?;

    let configs = NotificationConfigRepository::new(db).get_with_channel().await?;

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].guild_id, 1);

    Ok(())
}
