use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::tag::{CreateTagParam, Tag},
};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTagParam, now: DateTime<Utc>) -> Result<Tag, AppError> {
        let entity = entity::tag::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            author_id: ActiveValue::Set(param.author_id.to_string()),
            name: ActiveValue::Set(param.name),
            content: ActiveValue::Set(param.content),
            uses: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Tag::from_entity(entity)
    }

    async fn find_entity(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<entity::tag::Model>, AppError> {
        Ok(entity::prelude::Tag::find()
            .filter(entity::tag::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await?)
    }

    pub async fn find(&self, guild_id: u64, name: &str) -> Result<Option<Tag>, AppError> {
        self.find_entity(guild_id, name)
            .await?
            .map(Tag::from_entity)
            .transpose()
    }

    /// Fetches a tag and counts the use.
    ///
    /// # Returns
    /// - `Ok(Some(Tag))` - Tag with its incremented use counter
    /// - `Ok(None)` - No such tag in the guild
    pub async fn use_tag(&self, guild_id: u64, name: &str) -> Result<Option<Tag>, AppError> {
        let Some(entity) = self.find_entity(guild_id, name).await? else {
            return Ok(None);
        };

        let uses = entity.uses + 1;
        let mut active: entity::tag::ActiveModel = entity.into();
        active.uses = ActiveValue::Set(uses);
        let entity = active.update(self.db).await?;

        Ok(Some(Tag::from_entity(entity)?))
    }

    /// Tags of a guild sorted by name.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<Tag>, AppError> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Tag::from_entity)
            .collect()
    }

    pub async fn delete(&self, guild_id: u64, name: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Tag::delete_many()
            .filter(entity::tag::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::tag::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
