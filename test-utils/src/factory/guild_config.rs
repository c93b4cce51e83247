//! Guild configuration factory.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default welcome template stored for new guilds.
pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Hello {user}, welcome to {server}!\nYou are member #{count}.\nHave fun!";

/// Factory for creating guild configuration rows.
///
/// Every module switch defaults to enabled, matching a freshly created configuration.
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    welcome_channel_id: Option<String>,
    welcome_role_id: Option<String>,
    ticket_category_id: Option<String>,
    daily_channel_id: Option<String>,
    welcome_message_text: String,
    module_welcome: bool,
    module_music: bool,
}

impl<'a> GuildConfigFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_snowflake(),
            welcome_channel_id: None,
            welcome_role_id: None,
            ticket_category_id: None,
            daily_channel_id: None,
            welcome_message_text: DEFAULT_WELCOME_MESSAGE.to_string(),
            module_welcome: true,
            module_music: true,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn welcome_channel_id(mut self, channel_id: Option<String>) -> Self {
        self.welcome_channel_id = channel_id;
        self
    }

    pub fn welcome_role_id(mut self, role_id: Option<String>) -> Self {
        self.welcome_role_id = role_id;
        self
    }

    pub fn ticket_category_id(mut self, category_id: Option<String>) -> Self {
        self.ticket_category_id = category_id;
        self
    }

    pub fn daily_channel_id(mut self, channel_id: Option<String>) -> Self {
        self.daily_channel_id = channel_id;
        self
    }

    pub fn welcome_message_text(mut self, text: impl Into<String>) -> Self {
        self.welcome_message_text = text.into();
        self
    }

    pub fn module_welcome(mut self, enabled: bool) -> Self {
        self.module_welcome = enabled;
        self
    }

    pub fn module_music(mut self, enabled: bool) -> Self {
        self.module_music = enabled;
        self
    }

    /// Builds and inserts the configuration row.
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            welcome_channel_id: ActiveValue::Set(self.welcome_channel_id),
            welcome_role_id: ActiveValue::Set(self.welcome_role_id),
            ticket_category_id: ActiveValue::Set(self.ticket_category_id),
            log_channel_id: ActiveValue::Set(None),
            daily_channel_id: ActiveValue::Set(self.daily_channel_id),
            welcome_message_text: ActiveValue::Set(self.welcome_message_text),
            module_welcome: ActiveValue::Set(self.module_welcome),
            module_levels: ActiveValue::Set(true),
            module_economy: ActiveValue::Set(true),
            module_music: ActiveValue::Set(self.module_music),
            module_tickets: ActiveValue::Set(true),
            module_automod: ActiveValue::Set(true),
            module_giveaways: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild configuration with default values.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_config_with_every_module_enabled() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let config = create_guild_config(db).await?;

        assert!(config.module_welcome);
        assert!(config.module_economy);
        assert!(config.module_music);
        assert!(config.welcome_channel_id.is_none());
        assert_eq!(config.welcome_message_text, DEFAULT_WELCOME_MESSAGE);

        Ok(())
    }
}
