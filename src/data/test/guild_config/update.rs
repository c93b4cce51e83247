use super::*;

fn param(guild_id: u64) -> UpdateGuildConfigParam {
    UpdateGuildConfigParam {
        guild_id,
        welcome_message_text: "Hi {user}".to_string(),
        module_welcome: false,
        module_economy: true,
        module_music: false,
        module_tickets: true,
        module_automod: false,
    }
}

/// Tests saving dashboard fields.
///
/// Verifies that the editable fields change and the others are left alone.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_editable_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("77")
        .welcome_channel_id(Some("1234".to_string()))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.update(param(77)).await?.unwrap();

    assert_eq!(config.welcome_message_text, "Hi {user}");
    assert!(!config.module_welcome);
    assert!(!config.module_music);
    assert!(!config.module_automod);
    assert!(config.module_tickets);
    assert!(config.module_levels);
    assert_eq!(config.welcome_channel_id, Some(1234));

    Ok(())
}

/// Tests updating a guild that has no configuration.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert!(repo.update(param(78)).await?.is_none());
    assert!(repo.find_by_guild_id(78).await?.is_none());

    Ok(())
}
