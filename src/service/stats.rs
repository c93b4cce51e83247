//! Statistics channels: voice channels renamed to show live server numbers.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::stats::StatChannelRepository,
    error::AppError,
    model::stats::{StatChannel, StatKind, COUNT_PLACEHOLDER},
};

/// Server numbers a refresh pass renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildCounts {
    pub members: u64,
    pub online: u64,
}

/// Value a statistic shows right now.
pub fn stat_value(kind: StatKind, counts: GuildCounts, now: DateTime<Utc>) -> String {
    match kind {
        StatKind::Members => counts.members.to_string(),
        StatKind::Online => counts.online.to_string(),
        StatKind::Date => now.format("%d/%m").to_string(),
    }
}

pub fn render_stat_name(name_format: &str, value: &str) -> String {
    name_format.replace(COUNT_PLACEHOLDER, value)
}

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn register(
        &self,
        guild_id: u64,
        channel_id: u64,
        kind: StatKind,
        name_format: &str,
    ) -> Result<StatChannel, AppError> {
        if !name_format.contains(COUNT_PLACEHOLDER) {
            return Err(AppError::BadRequest(format!(
                "The channel name needs a {} placeholder.",
                COUNT_PLACEHOLDER
            )));
        }

        StatChannelRepository::new(self.db)
            .create(guild_id, channel_id, kind, name_format)
            .await
    }

    pub async fn all(&self) -> Result<Vec<StatChannel>, AppError> {
        StatChannelRepository::new(self.db).get_all().await
    }

    pub async fn for_guild(&self, guild_id: u64) -> Result<Vec<StatChannel>, AppError> {
        StatChannelRepository::new(self.db).get_for_guild(guild_id).await
    }

    /// Forgets a channel that was deleted on Discord.
    pub async fn remove(&self, channel_id: u64) -> Result<bool, AppError> {
        StatChannelRepository::new(self.db)
            .delete_by_channel(channel_id)
            .await
    }
}
