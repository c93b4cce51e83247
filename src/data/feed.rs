//! News feed repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::feed::{CreateFeedParam, NewsFeed},
};

pub struct FeedRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateFeedParam,
        now: DateTime<Utc>,
    ) -> Result<NewsFeed, AppError> {
        let entity = entity::news_feed::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            role_id: ActiveValue::Set(param.role_id.map(|id| id.to_string())),
            name: ActiveValue::Set(param.name),
            url: ActiveValue::Set(param.url),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            last_post_url: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        NewsFeed::from_entity(entity)
    }

    pub async fn get_all(&self) -> Result<Vec<NewsFeed>, AppError> {
        entity::prelude::NewsFeed::find()
            .order_by_asc(entity::news_feed::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(NewsFeed::from_entity)
            .collect()
    }

    pub async fn get_for_guild(&self, guild_id: u64) -> Result<Vec<NewsFeed>, AppError> {
        entity::prelude::NewsFeed::find()
            .filter(entity::news_feed::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::news_feed::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(NewsFeed::from_entity)
            .collect()
    }

    /// Deletes a feed of the guild.
    ///
    /// # Returns
    /// - `Ok(false)` - No feed with that id belongs to the guild
    pub async fn delete(&self, guild_id: u64, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::NewsFeed::delete_many()
            .filter(entity::news_feed::Column::Id.eq(id))
            .filter(entity::news_feed::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn update_last_post(
        &self,
        id: i32,
        post_url: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::NewsFeed::update_many()
            .filter(entity::news_feed::Column::Id.eq(id))
            .col_expr(
                entity::news_feed::Column::LastPostUrl,
                Expr::value(Some(post_url.to_string())),
            )
            .col_expr(entity::news_feed::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
