//! News feed factory.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating news feed rows.
///
/// # Example
///
/// ```rust,ignore
/// let seen = NewsFeedFactory::new(&db)
///     .last_post_url("https://blog.example/1")
///     .build()
///     .await?;
/// ```
pub struct NewsFeedFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    url: String,
    kind: String,
    last_post_url: Option<String>,
}

impl<'a> NewsFeedFactory<'a> {
    /// Defaults to an RSS feed that never announced anything.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_snowflake(),
            url: format!("https://feed{}.example/rss", next_id()),
            kind: "rss".to_string(),
            last_post_url: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn last_post_url(mut self, url: impl Into<String>) -> Self {
        self.last_post_url = Some(url.into());
        self
    }

    pub async fn build(self) -> Result<entity::news_feed::Model, DbErr> {
        entity::news_feed::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(next_snowflake()),
            role_id: ActiveValue::Set(None),
            name: ActiveValue::Set(format!("Feed {}", next_id())),
            url: ActiveValue::Set(self.url),
            kind: ActiveValue::Set(self.kind),
            last_post_url: ActiveValue::Set(self.last_post_url),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_news_feed(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::news_feed::Model, DbErr> {
    NewsFeedFactory::new(db).guild_id(guild_id).build().await
}
