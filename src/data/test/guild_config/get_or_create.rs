use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that a missing configuration is created with defaults.
///
/// Expected: Ok with the stock welcome template and every module enabled
#[tokio::test]
async fn creates_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.get_or_create(555).await?;

    assert_eq!(config.guild_id, 555);
    assert_eq!(config.welcome_message_text, DEFAULT_WELCOME_MESSAGE);
    assert!(config.welcome_channel_id.is_none());
    assert!(config.module_welcome);
    assert!(config.module_levels);
    assert!(config.module_economy);
    assert!(config.module_music);
    assert!(config.module_tickets);
    assert!(config.module_automod);
    assert!(config.module_giveaways);

    Ok(())
}

/// Tests that repeated calls reuse the same row.
///
/// Expected: Ok with one row in the table
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let first = repo.get_or_create(555).await?;
    let second = repo.get_or_create(555).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::GuildConfig::find().count(db).await?, 1);

    Ok(())
}

/// Tests finding a configuration that was never created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    assert!(repo.find_by_guild_id(1).await?.is_none());

    Ok(())
}
