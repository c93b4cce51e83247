use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Colour, CreateAllowedMentions, CreateEmbed, CreateEmbedFooter, CreateMessage,
    Http, RoleId,
};

use crate::{
    error::AppError,
    model::deals::{Deal, NotificationConfig},
    service::deals::{fetch_latest_deal, teaser, DealsService},
};

const DEAL_COLOUR: Colour = Colour::from_rgb(114, 137, 218);

/// Announces the newest free game in every guild that has not seen it.
///
/// # Returns
/// - `Ok(usize)` - Number of guilds the game was posted to
pub async fn announce_deals(
    db: &DatabaseConnection,
    http: &Http,
    web: &reqwest::Client,
) -> Result<usize, AppError> {
    let Some(deal) = fetch_latest_deal(web).await? else {
        return Ok(0);
    };

    let service = DealsService::new(db);
    let mut posted = 0;

    for config in service.pending(&deal).await? {
        if let Err(e) = post(http, &config, &deal).await {
            tracing::warn!("Failed to announce free game in guild {}: {}", config.guild_id, e);
            continue;
        }

        posted += 1;
        if let Err(e) = service.mark_posted(config.guild_id, deal.id).await {
            tracing::error!("Failed to record free game of guild {}: {}", config.guild_id, e);
        }
    }

    if posted > 0 {
        tracing::info!("Free game {} announced in {} guild(s)", deal.id, posted);
    }

    Ok(posted)
}

async fn post(http: &Http, config: &NotificationConfig, deal: &Deal) -> Result<(), AppError> {
    let Some(channel_id) = config.free_games_channel_id else {
        return Ok(());
    };

    let mut content = "🚨 **New loot detected!**".to_string();
    let mut mentions = CreateAllowedMentions::new();
    if let Some(role_id) = config.mention_role_id {
        content.push_str(&format!(" <@&{}>", role_id));
        mentions = mentions.roles(vec![RoleId::new(role_id)]);
    }

    ChannelId::new(channel_id)
        .send_message(
            http,
            CreateMessage::new()
                .content(content)
                .embed(deal_embed(deal))
                .allowed_mentions(mentions),
        )
        .await?;

    Ok(())
}

fn deal_embed(deal: &Deal) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("🎁 Free game: {}", deal.title))
        .description(format!(
            "{}\n\n**[Claim it here!]({})**",
            teaser(&deal.description),
            deal.open_giveaway_url
        ))
        .colour(DEAL_COLOUR)
        .field("💰 Value", format!("~~{}~~ **FREE**", deal.worth), true)
        .field("🎮 Platform", deal.platforms.clone(), true)
        .field("⏰ Expires", deal.end_date.clone(), true)
        .footer(CreateEmbedFooter::new("Source: GamerPower"));

    if let Some(image) = &deal.image {
        embed = embed.image(image);
    }

    embed
}
