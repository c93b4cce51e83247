use super::*;

/// Tests listing guilds with a welcome channel.
///
/// Expected: the guild with only a daily channel is skipped
#[tokio::test]
async fn lists_guilds_with_welcome_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("1")
        .welcome_channel_id(Some("10".to_string()))
        .build()
        .await?;
    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("2")
        .daily_channel_id(Some("20".to_string()))
        .build()
        .await?;
    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("3")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);

    let welcome = repo.get_with_welcome_channel().await?;
    assert_eq!(welcome.len(), 1);
    assert_eq!(welcome[0].guild_id, 1);
    assert_eq!(welcome[0].welcome_channel_id, Some(10));

    Ok(())
}
