use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Colour, Context, CreateEmbedFooter, CreateMessage, Mentionable, Member, RoleId,
};

use crate::bot::embed;
use crate::model::guild_config::{render_welcome, WelcomePlaceholders};
use crate::service::guild_config::GuildConfigService;

/// Handles the guild_member_addition event when a member joins a guild
///
/// Grants the auto-role and posts the welcome message when the welcome module is on.
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    ctx: Context,
    new_member: Member,
) {
    let guild_id = new_member.guild_id;

    // Guilds without a configuration have nothing to welcome with
    let Some(config) = (match GuildConfigService::new(db).find(guild_id.get()).await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load guild config for {}: {:?}", guild_id, e);
            return;
        }
    }) else {
        return;
    };

    if !config.module_welcome {
        return;
    }

    if let Some(role_id) = config.welcome_role_id {
        if let Err(e) = new_member
            .add_role(&ctx.http, RoleId::new(role_id))
            .await
        {
            tracing::warn!(
                "Failed to grant auto-role {} in guild {}: {:?}",
                role_id,
                guild_id,
                e
            );
        }
    }

    let Some(channel_id) = config.welcome_channel_id else {
        return;
    };

    let cached = ctx
        .cache
        .guild(guild_id)
        .map(|guild| (guild.name.clone(), guild.member_count));

    let (server, count) = match cached {
        Some(values) => values,
        None => match ctx.http.get_guild_with_counts(guild_id).await {
            Ok(guild) => (guild.name, guild.approximate_member_count.unwrap_or(0)),
            Err(e) => {
                tracing::warn!("Failed to fetch guild {}: {:?}", guild_id, e);
                ("the server".to_string(), 0)
            }
        },
    };

    let mention = new_member.mention().to_string();
    let text = render_welcome(
        &config.welcome_message_text,
        &WelcomePlaceholders {
            user: &mention,
            name: new_member.display_name(),
            server: &server,
            count,
        },
    );

    let embed = embed::base("👋 New member!", text)
        .colour(Colour::GOLD)
        .thumbnail(new_member.face())
        .footer(CreateEmbedFooter::new(format!(
            "Member #{} • ID: {}",
            count, new_member.user.id
        )));

    if let Err(e) = ChannelId::new(channel_id)
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::warn!("Failed to send welcome message in guild {}: {:?}", guild_id, e);
    } else {
        tracing::info!("Welcomed {} to guild {}", new_member.user.name, guild_id);
    }
}
