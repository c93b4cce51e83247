use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Colour, CreateEmbed, CreateEmbedFooter, CreateMessage, Http};

use crate::{error::AppError, service::guild_config::GuildConfigService, util::quote::random_quote};

/// Posts a random quote in every guild that configured a daily channel.
pub async fn post_daily_quotes(db: &DatabaseConnection, http: &Http) -> Result<(), AppError> {
    let configs = GuildConfigService::new(db).with_daily_channel().await?;

    for config in configs {
        let Some(channel_id) = config.daily_channel_id else {
            continue;
        };

        let embed = CreateEmbed::new()
            .title("☀️ Thought of the day")
            .description(format!("*{}*", random_quote()))
            .colour(Colour::GOLD)
            .footer(CreateEmbedFooter::new("Stay disciplined."));

        if let Err(e) = ChannelId::new(channel_id)
            .send_message(http, CreateMessage::new().embed(embed))
            .await
        {
            tracing::warn!(
                "Failed to post the daily quote in guild {}: {}",
                config.guild_id,
                e
            );
        }
    }

    Ok(())
}
