use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{Channel, ChannelId, EditChannel, GuildId, Http};

use crate::{
    bot::discord_error::is_unknown_resource,
    error::AppError,
    model::stats::StatChannel,
    service::stats::{render_stat_name, stat_value, GuildCounts, StatsService},
};

/// Renames every statistics channel to its current value.
///
/// Channels deleted on Discord are forgotten. A guild that cannot be read is skipped until
/// the next pass.
pub async fn refresh_stat_channels(
    db: &DatabaseConnection,
    http: &Http,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let stats = StatsService::new(db).all().await?;

    for guild_stats in stats.chunk_by(|a, b| a.guild_id == b.guild_id) {
        let guild_id = GuildId::new(guild_stats[0].guild_id);

        if let Err(e) = refresh_guild(db, http, guild_id, guild_stats, now).await {
            tracing::warn!("Failed to refresh statistics of guild {}: {}", guild_id, e);
        }
    }

    Ok(())
}

/// Refreshes the statistics channels of one guild.
pub async fn refresh_guild(
    db: &DatabaseConnection,
    http: &Http,
    guild_id: GuildId,
    stats: &[StatChannel],
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let guild = http.get_guild_with_counts(guild_id).await?;
    let counts = GuildCounts {
        members: guild.approximate_member_count.unwrap_or(0),
        online: guild.approximate_presence_count.unwrap_or(0),
    };

    for stat in stats {
        let channel_id = ChannelId::new(stat.channel_id);
        let name = render_stat_name(&stat.name_format, &stat_value(stat.kind, counts, now));

        let mut channel = match http.get_channel(channel_id).await {
            Ok(Channel::Guild(channel)) => channel,
            Ok(_) => continue,
            Err(e) if is_unknown_resource(&e) => {
                tracing::info!("Statistics channel {} was deleted, forgetting it", channel_id);
                StatsService::new(db).remove(stat.channel_id).await?;
                continue;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch statistics channel {}: {}", channel_id, e);
                continue;
            }
        };

        if channel.name == name {
            continue;
        }

        if let Err(e) = channel.edit(http, EditChannel::new().name(&name)).await {
            tracing::warn!("Failed to rename statistics channel {}: {}", channel_id, e);
        }
    }

    Ok(())
}
