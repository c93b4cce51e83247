//! Guild configuration repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::guild_config::{
        GuildConfig, GuildSetting, UpdateGuildConfigParam, DEFAULT_WELCOME_MESSAGE,
    },
};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entity(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_config::Model>, AppError> {
        Ok(entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?)
    }

    /// Finds the configuration of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Configuration exists
    /// - `Ok(None)` - Guild never configured
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfig>, AppError> {
        self.find_entity(guild_id)
            .await?
            .map(GuildConfig::from_entity)
            .transpose()
    }

    /// Returns the guild configuration, inserting the defaults when none exists.
    ///
    /// Defaults: no channels or roles, the stock welcome template and every module
    /// switched on.
    pub async fn get_or_create(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        if let Some(config) = self.find_by_guild_id(guild_id).await? {
            return Ok(config);
        }

        let inserted = entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            welcome_channel_id: ActiveValue::Set(None),
            welcome_role_id: ActiveValue::Set(None),
            ticket_category_id: ActiveValue::Set(None),
            log_channel_id: ActiveValue::Set(None),
            daily_channel_id: ActiveValue::Set(None),
            welcome_message_text: ActiveValue::Set(DEFAULT_WELCOME_MESSAGE.to_string()),
            module_welcome: ActiveValue::Set(true),
            module_levels: ActiveValue::Set(true),
            module_economy: ActiveValue::Set(true),
            module_music: ActiveValue::Set(true),
            module_tickets: ActiveValue::Set(true),
            module_automod: ActiveValue::Set(true),
            module_giveaways: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(entity) => GuildConfig::from_entity(entity),
            Err(err) => match self.find_by_guild_id(guild_id).await? {
                Some(config) => Ok(config),
                None => Err(err.into()),
            },
        }
    }

    /// Applies the dashboard fields to an existing configuration.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Updated configuration
    /// - `Ok(None)` - Guild has no configuration row
    pub async fn update(
        &self,
        param: UpdateGuildConfigParam,
    ) -> Result<Option<GuildConfig>, AppError> {
        let Some(entity) = self.find_entity(param.guild_id).await? else {
            return Ok(None);
        };

        let mut active: entity::guild_config::ActiveModel = entity.into();
        active.welcome_message_text = ActiveValue::Set(param.welcome_message_text);
        active.module_welcome = ActiveValue::Set(param.module_welcome);
        active.module_economy = ActiveValue::Set(param.module_economy);
        active.module_music = ActiveValue::Set(param.module_music);
        active.module_tickets = ActiveValue::Set(param.module_tickets);
        active.module_automod = ActiveValue::Set(param.module_automod);

        let entity = active.update(self.db).await?;

        Ok(Some(GuildConfig::from_entity(entity)?))
    }

    /// Sets one channel or role slot, creating the configuration when needed.
    ///
    /// Passing `None` clears the slot. Setting the welcome channel switches the welcome
    /// module back on.
    pub async fn set(
        &self,
        guild_id: u64,
        setting: GuildSetting,
        value: Option<u64>,
    ) -> Result<GuildConfig, AppError> {
        self.get_or_create(guild_id).await?;
        let Some(entity) = self.find_entity(guild_id).await? else {
            return Err(AppError::InternalError(format!(
                "Guild config {} vanished after creation",
                guild_id
            )));
        };

        let enables_welcome = setting == GuildSetting::WelcomeChannel && value.is_some();
        let value = ActiveValue::Set(value.map(|id| id.to_string()));
        let mut active: entity::guild_config::ActiveModel = entity.into();
        if enables_welcome {
            active.module_welcome = ActiveValue::Set(true);
        }
        match setting {
            GuildSetting::WelcomeChannel => active.welcome_channel_id = value,
            GuildSetting::WelcomeRole => active.welcome_role_id = value,
            GuildSetting::TicketCategory => active.ticket_category_id = value,
            GuildSetting::DailyChannel => active.daily_channel_id = value,
            GuildSetting::LogChannel => active.log_channel_id = value,
        }

        GuildConfig::from_entity(active.update(self.db).await?)
    }

    /// Replaces the welcome template, creating the configuration when needed.
    pub async fn set_welcome_message(
        &self,
        guild_id: u64,
        text: String,
    ) -> Result<GuildConfig, AppError> {
        self.get_or_create(guild_id).await?;
        let Some(entity) = self.find_entity(guild_id).await? else {
            return Err(AppError::InternalError(format!(
                "Guild config {} vanished after creation",
                guild_id
            )));
        };

        let mut active: entity::guild_config::ActiveModel = entity.into();
        active.welcome_message_text = ActiveValue::Set(text);

        GuildConfig::from_entity(active.update(self.db).await?)
    }

    /// Guilds that configured a channel for the daily quote.
    pub async fn get_with_daily_channel(&self) -> Result<Vec<GuildConfig>, AppError> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::DailyChannelId.is_not_null())
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildConfig::from_entity)
            .collect()
    }

    /// Guilds that configured a welcome channel.
    pub async fn get_with_welcome_channel(&self) -> Result<Vec<GuildConfig>, AppError> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::WelcomeChannelId.is_not_null())
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildConfig::from_entity)
            .collect()
    }
}
