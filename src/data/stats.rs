//! Statistics channel repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::stats::{StatChannel, StatKind},
};

pub struct StatChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        guild_id: u64,
        channel_id: u64,
        kind: StatKind,
        name_format: &str,
    ) -> Result<StatChannel, AppError> {
        let entity = entity::stat_channel::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            name_format: ActiveValue::Set(name_format.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        StatChannel::from_entity(entity)
    }

    /// Every statistics channel, grouped by guild.
    pub async fn get_all(&self) -> Result<Vec<StatChannel>, AppError> {
        entity::prelude::StatChannel::find()
            .order_by_asc(entity::stat_channel::Column::GuildId)
            .order_by_asc(entity::stat_channel::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(StatChannel::from_entity)
            .collect()
    }

    pub async fn get_for_guild(&self, guild_id: u64) -> Result<Vec<StatChannel>, AppError> {
        entity::prelude::StatChannel::find()
            .filter(entity::stat_channel::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::stat_channel::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(StatChannel::from_entity)
            .collect()
    }

    pub async fn delete_by_channel(&self, channel_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::StatChannel::delete_many()
            .filter(entity::stat_channel::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
