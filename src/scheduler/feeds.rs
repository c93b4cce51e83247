use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateAllowedMentions, CreateMessage, Http, RoleId};

use crate::{
    error::AppError,
    model::feed::{FeedEntry, NewsFeed},
    service::feed::{announcement, latest_entry, FeedService},
};

/// Announces the newest entry of every feed whose latest link changed.
///
/// A feed that cannot be fetched or posted keeps its last link and is retried on the
/// next pass.
pub async fn check_feeds(
    db: &DatabaseConnection,
    http: &Http,
    web: &reqwest::Client,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let service = FeedService::new(db);

    for feed in service.all().await? {
        let entry = match fetch_latest(web, &feed.url).await {
            Ok(Some(entry)) => entry,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!("Failed to read feed {} ({}): {}", feed.id, feed.name, e);
                continue;
            }
        };

        if feed.last_post_url.as_deref() == Some(entry.link.as_str()) {
            continue;
        }

        if let Err(e) = post(http, &feed, &entry).await {
            tracing::warn!("Failed to announce feed {} in channel {}: {}", feed.id, feed.channel_id, e);
            continue;
        }

        if let Err(e) = service.mark_posted(feed.id, &entry.link, now).await {
            tracing::error!("Failed to record the last post of feed {}: {}", feed.id, e);
        }
    }

    Ok(())
}

async fn fetch_latest(web: &reqwest::Client, url: &str) -> Result<Option<FeedEntry>, AppError> {
    let body = web.get(url).send().await?.error_for_status()?.text().await?;
    latest_entry(&body)
}

async fn post(http: &Http, feed: &NewsFeed, entry: &FeedEntry) -> Result<(), AppError> {
    let mut mentions = CreateAllowedMentions::new();
    if let Some(role_id) = feed.role_id {
        mentions = mentions.roles(vec![RoleId::new(role_id)]);
    }

    ChannelId::new(feed.channel_id)
        .send_message(
            http,
            CreateMessage::new()
                .content(announcement(feed, entry))
                .allowed_mentions(mentions),
        )
        .await?;

    Ok(())
}
