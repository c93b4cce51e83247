//! News feeds: YouTube channels and RSS or Atom feeds announced in a channel.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use xmlparser::{ElementEnd, Token, Tokenizer};

use crate::{
    data::feed::FeedRepository,
    error::AppError,
    model::feed::{CreateFeedParam, FeedEntry, FeedKind, NewsFeed},
};

const YOUTUBE_FEED_BASE: &str = "https://www.youtube.com/feeds/videos.xml?channel_id=";
const MAX_NAME_LENGTH: usize = 100;

/// XML feed address of a YouTube channel link.
///
/// Accepts `youtube.com/channel/<id>` links and feed addresses. Handles such as
/// `youtube.com/@name` have no feed and are refused.
pub fn youtube_feed_url(url: &str) -> Result<String, AppError> {
    if let Some((_, rest)) = url.split_once("channel/") {
        let channel_id = rest
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        if !channel_id.is_empty() {
            return Ok(format!("{}{}", YOUTUBE_FEED_BASE, channel_id));
        }
    }

    if url.contains("feeds/videos.xml") {
        return Ok(url.to_string());
    }

    Err(AppError::BadRequest(
        "For YouTube use the full channel link with its id (youtube.com/channel/UC...). \
         Handle links (@name) have no feed."
            .to_string(),
    ))
}

/// Message posted for a new entry.
pub fn announcement(feed: &NewsFeed, entry: &FeedEntry) -> String {
    let mut content = format!("📢 **New update from {}!**", feed.name);
    if let Some(role_id) = feed.role_id {
        content.push_str(&format!(" <@&{}>", role_id));
    }
    content.push_str(&format!("\n\n**{}**\n{}", entry.title, entry.link));
    content
}

/// First `<item>` (RSS) or `<entry>` (Atom) of a feed document.
///
/// RSS links are element text, Atom links are the `href` of `<link>`.
pub fn latest_entry(xml: &str) -> Result<Option<FeedEntry>, AppError> {
    let mut depth = 0usize;
    // Depth of the entry being read
    let mut entry_depth: Option<usize> = None;
    let mut current: Option<String> = None;
    let mut title = String::new();
    let mut link = String::new();

    for token in Tokenizer::from(xml) {
        let token =
            token.map_err(|e| AppError::InternalError(format!("Malformed feed: {}", e)))?;

        match token {
            Token::ElementStart { local, .. } => {
                depth += 1;
                let name = local.as_str();

                match entry_depth {
                    None if name == "item" || name == "entry" => entry_depth = Some(depth),
                    Some(start) if depth == start + 1 => current = Some(name.to_string()),
                    _ => {}
                }
            }
            Token::Attribute { local, value, .. } => {
                if is_reading(&current, entry_depth, depth, "link")
                    && local.as_str() == "href"
                    && link.is_empty()
                {
                    link = unescape(value.as_str());
                }
            }
            Token::Text { text } | Token::Cdata { text, .. } => {
                let text = text.as_str();
                match current.as_deref() {
                    Some("title") if title.is_empty() => title = unescape(text.trim()),
                    Some("link") if link.is_empty() => link = unescape(text.trim()),
                    _ => {}
                }
            }
            Token::ElementEnd { end, .. } => {
                let closes = match end {
                    ElementEnd::Open => false,
                    ElementEnd::Close(..) | ElementEnd::Empty => true,
                };
                if !closes {
                    continue;
                }

                if let Some(start) = entry_depth {
                    if depth == start + 1 {
                        current = None;
                    } else if depth == start {
                        if title.is_empty() || link.is_empty() {
                            return Ok(None);
                        }
                        return Ok(Some(FeedEntry { title, link }));
                    }
                }
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    Ok(None)
}

/// Attributes arrive after the element start, while `depth` is still the element's own.
fn is_reading(
    current: &Option<String>,
    entry_depth: Option<usize>,
    depth: usize,
    name: &str,
) -> bool {
    current.as_deref() == Some(name) && entry_depth.map(|start| start + 1) == Some(depth)
}

/// Resolves the predefined XML entities and numeric character references.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };

        let entity = &tail[1..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                .and_then(char::from_u32),
        };

        match decoded {
            Some(c) => out.push(c),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

pub struct FeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a feed, turning YouTube channel links into their feed address.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty or overlong name, non-HTTP URL or a YouTube
    ///   link without a channel id
    pub async fn add(
        &self,
        mut param: CreateFeedParam,
        now: DateTime<Utc>,
    ) -> Result<NewsFeed, AppError> {
        param.name = param.name.trim().to_string();
        if param.name.is_empty() || param.name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::BadRequest(format!(
                "The feed name must be 1 to {} characters.",
                MAX_NAME_LENGTH
            )));
        }

        let url = param.url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::BadRequest(
                "The feed URL must start with http:// or https://.".to_string(),
            ));
        }

        param.url = match param.kind {
            FeedKind::Youtube => youtube_feed_url(url)?,
            FeedKind::Rss => url.to_string(),
        };

        FeedRepository::new(self.db).create(param, now).await
    }

    pub async fn all(&self) -> Result<Vec<NewsFeed>, AppError> {
        FeedRepository::new(self.db).get_all().await
    }

    pub async fn for_guild(&self, guild_id: u64) -> Result<Vec<NewsFeed>, AppError> {
        FeedRepository::new(self.db).get_for_guild(guild_id).await
    }

    pub async fn remove(&self, guild_id: u64, id: i32) -> Result<(), AppError> {
        if FeedRepository::new(self.db).delete(guild_id, id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Feed #{} not found.", id)))
        }
    }

    pub async fn mark_posted(
        &self,
        id: i32,
        post_url: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        FeedRepository::new(self.db)
            .update_last_post(id, post_url, now)
            .await?;

        Ok(())
    }
}
