use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Source format of a news feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Youtube,
    Rss,
}

impl FeedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedKind::Youtube => "youtube",
            FeedKind::Rss => "rss",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "youtube" => Some(FeedKind::Youtube),
            "rss" => Some(FeedKind::Rss),
            _ => None,
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// YouTube channel or RSS feed announced in a guild channel.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsFeed {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Role mentioned with each announcement
    pub role_id: Option<u64>,
    pub name: String,
    /// Address of the XML feed itself
    pub url: String,
    pub kind: FeedKind,
    /// Link of the newest entry already announced
    pub last_post_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl NewsFeed {
    pub fn from_entity(entity: entity::news_feed::Model) -> Result<Self, AppError> {
        let kind = FeedKind::from_db(&entity.kind).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown feed kind '{}' on feed {}",
                entity.kind, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            role_id: parse_optional_u64(entity.role_id)?,
            name: entity.name,
            url: entity.url,
            kind,
            last_post_url: entity.last_post_url,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateFeedParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub role_id: Option<u64>,
    pub name: String,
    pub url: String,
    pub kind: FeedKind,
}

/// Newest entry of a fetched feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
}
