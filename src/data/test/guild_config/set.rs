use super::*;

/// Tests setting and clearing a channel slot.
///
/// Expected: Ok with the slot set, then cleared
#[tokio::test]
async fn sets_and_clears_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    let config = repo.set(9, GuildSetting::DailyChannel, Some(321)).await?;
    assert_eq!(config.daily_channel_id, Some(321));
    assert!(config.welcome_channel_id.is_none());

    let config = repo.set(9, GuildSetting::DailyChannel, None).await?;
    assert!(config.daily_channel_id.is_none());

    Ok(())
}

/// Tests that each setting writes its own column.
///
/// Expected: Ok with independent slots
#[tokio::test]
async fn settings_are_independent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.set(9, GuildSetting::WelcomeChannel, Some(1)).await?;
    repo.set(9, GuildSetting::WelcomeRole, Some(2)).await?;
    let config = repo.set(9, GuildSetting::TicketCategory, Some(3)).await?;

    assert_eq!(config.welcome_channel_id, Some(1));
    assert_eq!(config.welcome_role_id, Some(2));
    assert_eq!(config.ticket_category_id, Some(3));

    let config = repo.set_welcome_message(9, "Yo {user}".to_string()).await?;
    assert_eq!(config.welcome_message_text, "Yo {user}");
    assert_eq!(config.welcome_role_id, Some(2));

    Ok(())
}

/// Tests listing guilds with a daily quote channel.
///
/// Expected: Ok with only the configured guild
#[tokio::test]
async fn lists_guilds_with_daily_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("100")
        .daily_channel_id(Some("200".to_string()))
        .build()
        .await?;
    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("101")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let configs = repo.get_with_daily_channel().await?;

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].guild_id, 100);
    assert_eq!(configs[0].daily_channel_id, Some(200));

    Ok(())
}

/// Tests that choosing a welcome channel re-enables a disabled welcome module.
///
/// Expected: Ok with `module_welcome` switched on
#[tokio::test]
async fn welcome_channel_enables_module() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("9")
        .module_welcome(false)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.set(9, GuildSetting::WelcomeChannel, Some(5)).await?;

    assert!(config.module_welcome);
    assert_eq!(config.welcome_channel_id, Some(5));

    Ok(())
}

/// Tests storing the moderation log channel.
///
/// Expected: Ok with only the log channel slot set
#[tokio::test]
async fn sets_log_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.set(9, GuildSetting::LogChannel, Some(77)).await?;

    assert_eq!(config.log_channel_id, Some(77));
    assert!(config.daily_channel_id.is_none());
    assert!(config.is_enabled(GuildModule::Automod));

    Ok(())
}
