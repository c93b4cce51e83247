use crate::{
    error::AppError,
    model::guild_config::UpdateGuildConfigParam,
    service::guild_config::GuildConfigService,
};
use test_utils::builder::TestBuilder;

/// Tests that updating an unknown guild is reported as not found.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn update_requires_existing_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildConfigService::new(db);
    let result = service
        .update(UpdateGuildConfigParam {
            guild_id: 1,
            welcome_message_text: "Hi".to_string(),
            module_welcome: true,
            module_economy: true,
            module_music: true,
            module_tickets: true,
            module_automod: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests welcome message validation.
///
/// Expected: Err(BadRequest) for blank text, Ok with trimmed text otherwise
#[tokio::test]
async fn validates_welcome_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildConfigService::new(db);

    assert!(matches!(
        service.set_welcome_message(1, "  ").await,
        Err(AppError::BadRequest(_))
    ));

    let config = service.set_welcome_message(1, " Welcome {user}! ").await?;
    assert_eq!(config.welcome_message_text, "Welcome {user}!");

    Ok(())
}
