//! Starboard settings and reposted messages.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::starboard::{CreateStarboardEntryParam, StarboardConfig, StarboardEntry},
};

pub struct StarboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_config(&self, guild_id: u64) -> Result<Option<StarboardConfig>, AppError> {
        entity::prelude::StarboardConfig::find()
            .filter(entity::starboard_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(StarboardConfig::from_entity)
            .transpose()
    }

    /// Creates or replaces the guild's starboard channel and threshold.
    pub async fn upsert_config(
        &self,
        guild_id: u64,
        channel_id: u64,
        threshold: i32,
    ) -> Result<StarboardConfig, AppError> {
        let existing = entity::prelude::StarboardConfig::find()
            .filter(entity::starboard_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(model) => {
                let mut active: entity::starboard_config::ActiveModel = model.into();
                active.channel_id = ActiveValue::Set(channel_id.to_string());
                active.threshold = ActiveValue::Set(threshold);
                active.update(self.db).await?
            }
            None => {
                entity::starboard_config::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    channel_id: ActiveValue::Set(channel_id.to_string()),
                    threshold: ActiveValue::Set(threshold),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        StarboardConfig::from_entity(entity)
    }

    pub async fn find_entry(
        &self,
        original_message_id: u64,
    ) -> Result<Option<StarboardEntry>, AppError> {
        entity::prelude::StarboardEntry::find()
            .filter(
                entity::starboard_entry::Column::OriginalMessageId
                    .eq(original_message_id.to_string()),
            )
            .one(self.db)
            .await?
            .map(StarboardEntry::from_entity)
            .transpose()
    }

    pub async fn create_entry(
        &self,
        param: CreateStarboardEntryParam,
    ) -> Result<StarboardEntry, AppError> {
        let entity = entity::starboard_entry::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            original_message_id: ActiveValue::Set(param.original_message_id.to_string()),
            original_channel_id: ActiveValue::Set(param.original_channel_id.to_string()),
            starboard_message_id: ActiveValue::Set(param.starboard_message_id.to_string()),
            stars: ActiveValue::Set(param.stars),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        StarboardEntry::from_entity(entity)
    }

    pub async fn update_stars(&self, id: i32, stars: i32) -> Result<(), AppError> {
        entity::prelude::StarboardEntry::update_many()
            .filter(entity::starboard_entry::Column::Id.eq(id))
            .col_expr(entity::starboard_entry::Column::Stars, Expr::value(stars))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
