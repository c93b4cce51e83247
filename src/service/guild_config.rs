use sea_orm::DatabaseConnection;

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::{GuildConfig, GuildSetting, UpdateGuildConfigParam},
};

/// Longest welcome template accepted, matching Discord's message limit.
pub const MAX_WELCOME_MESSAGE_LENGTH: usize = 2000;

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Configuration of a guild, created with defaults when missing.
    pub async fn get_or_create(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        GuildConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await
    }

    /// Configuration of a guild without creating it.
    pub async fn find(&self, guild_id: u64) -> Result<Option<GuildConfig>, AppError> {
        GuildConfigRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await
    }

    /// Saves the dashboard fields.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Updated configuration
    /// - `Err(AppError::NotFound)` - The guild has no configuration yet
    pub async fn update(&self, param: UpdateGuildConfigParam) -> Result<GuildConfig, AppError> {
        GuildConfigRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Guild not found".to_string()))
    }

    pub async fn set(
        &self,
        guild_id: u64,
        setting: GuildSetting,
        value: Option<u64>,
    ) -> Result<GuildConfig, AppError> {
        GuildConfigRepository::new(self.db)
            .set(guild_id, setting, value)
            .await
    }

    pub async fn set_welcome_message(
        &self,
        guild_id: u64,
        text: &str,
    ) -> Result<GuildConfig, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest(
                "The welcome message cannot be empty.".to_string(),
            ));
        }
        if text.chars().count() > MAX_WELCOME_MESSAGE_LENGTH {
            return Err(AppError::BadRequest(format!(
                "The welcome message can be at most {} characters long.",
                MAX_WELCOME_MESSAGE_LENGTH
            )));
        }

        GuildConfigRepository::new(self.db)
            .set_welcome_message(guild_id, text.to_string())
            .await
    }

    pub async fn with_daily_channel(&self) -> Result<Vec<GuildConfig>, AppError> {
        GuildConfigRepository::new(self.db)
            .get_with_daily_channel()
            .await
    }

    /// Guilds where birthday announcements can be posted.
    pub async fn with_welcome_channel(&self) -> Result<Vec<GuildConfig>, AppError> {
        GuildConfigRepository::new(self.db)
            .get_with_welcome_channel()
            .await
    }
}
