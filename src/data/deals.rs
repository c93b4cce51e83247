//! Free game notification repository.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{error::AppError, model::deals::NotificationConfig};

pub struct NotificationConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entity(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::notification_config::Model>, AppError> {
        Ok(entity::prelude::NotificationConfig::find()
            .filter(entity::notification_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?)
    }

    /// Points the guild's announcements at a channel, creating the row on first use.
    pub async fn set_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
        role_id: Option<u64>,
    ) -> Result<NotificationConfig, AppError> {
        let entity = match self.find_entity(guild_id).await? {
            Some(model) => {
                let mut active: entity::notification_config::ActiveModel = model.into();
                active.free_games_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
                active.mention_role_id = ActiveValue::Set(role_id.map(|id| id.to_string()));
                active.update(self.db).await?
            }
            None => {
                entity::notification_config::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    free_games_channel_id: ActiveValue::Set(Some(channel_id.to_string())),
                    mention_role_id: ActiveValue::Set(role_id.map(|id| id.to_string())),
                    last_game_id: ActiveValue::Set(None),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        NotificationConfig::from_entity(entity)
    }

    pub async fn find_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<NotificationConfig>, AppError> {
        self.find_entity(guild_id)
            .await?
            .map(NotificationConfig::from_entity)
            .transpose()
    }

    /// Guilds with an announcement channel.
    pub async fn get_with_channel(&self) -> Result<Vec<NotificationConfig>, AppError> {
        entity::prelude::NotificationConfig::find()
            .filter(entity::notification_config::Column::FreeGamesChannelId.is_not_null())
            .order_by_asc(entity::notification_config::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(NotificationConfig::from_entity)
            .collect()
    }

    pub async fn set_last_game(&self, guild_id: u64, game_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::NotificationConfig::update_many()
            .filter(entity::notification_config::Column::GuildId.eq(guild_id.to_string()))
            .col_expr(
                entity::notification_config::Column::LastGameId,
                Expr::value(Some(game_id.to_string())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
