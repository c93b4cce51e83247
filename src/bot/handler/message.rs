use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage,
    EditMember, Http, Message, MessageId,
};

use crate::bot::embed;
use crate::bot::handler::logger::{field_text, send_log};
use crate::model::afk::restored_nickname;
use crate::model::guild_config::GuildModule;
use crate::service::afk::AfkService;
use crate::service::automod::{AutoModFilter, Violation};
use crate::service::guild_config::GuildConfigService;
use crate::util::timestamp;

const WELCOME_BACK_TTL: Duration = Duration::from_secs(5);
const AFK_NOTICE_TTL: Duration = Duration::from_secs(10);
const AUTOMOD_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Handles the message event when a message is sent in a channel
///
/// Runs the automod filter first when the guild enabled it; a removed message gets no
/// further handling. Then clears the AFK status of an author who is back and tells them
/// who was away among the members they mentioned.
pub async fn handle_message(
    db: &DatabaseConnection,
    automod: &AutoModFilter,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    let Some(guild_id) = message.guild_id else {
        return;
    };

    let automod_enabled = match GuildConfigService::new(db).find(guild_id.get()).await {
        Ok(config) => config.is_some_and(|c| c.is_enabled(GuildModule::Automod)),
        Err(e) => {
            tracing::error!("Failed to load guild config of {}: {:?}", guild_id, e);
            false
        }
    };

    if automod_enabled && !is_administrator(&ctx, &message) {
        if let Some(violation) = automod.check(&message.content) {
            enforce(db, &ctx, &message, guild_id, violation).await;
            return;
        }
    }

    let service = AfkService::new(db);

    match service.clear(message.author.id.get()).await {
        Ok(Some(status)) => {
            let nick = message.member.as_ref().and_then(|member| member.nick.clone());
            if let Some(original) = restored_nickname(nick.as_deref(), status.original_nick.as_deref()) {
                if let Err(e) = guild_id
                    .edit_member(
                        &ctx.http,
                        message.author.id,
                        EditMember::new().nickname(original),
                    )
                    .await
                {
                    tracing::debug!("Could not restore nickname of {}: {:?}", message.author.id, e);
                }
            }

            let welcome = CreateMessage::new().content(format!(
                "👋 Welcome back, <@{}>! I removed your AFK status.",
                message.author.id
            ));
            match message.channel_id.send_message(&ctx.http, welcome).await {
                Ok(sent) => delete_after(ctx.http.clone(), sent.channel_id, sent.id, WELCOME_BACK_TTL),
                Err(e) => tracing::warn!("Failed to send AFK welcome back: {:?}", e),
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to clear AFK status: {:?}", e);
            return;
        }
    }

    let mut mentioned: Vec<u64> = message
        .mentions
        .iter()
        .filter(|user| user.id != message.author.id && !user.bot)
        .map(|user| user.id.get())
        .collect();
    mentioned.sort_unstable();
    mentioned.dedup();

    if mentioned.is_empty() {
        return;
    }

    let statuses = match service.mentioned(&mentioned).await {
        Ok(statuses) => statuses,
        Err(e) => {
            tracing::error!("Failed to load AFK statuses: {:?}", e);
            return;
        }
    };

    for status in statuses {
        let Some(user) = message
            .mentions
            .iter()
            .find(|user| user.id.get() == status.user_id)
        else {
            continue;
        };

        let notice = CreateEmbed::new()
            .description(format!(
                "**Reason:** {}\n⏳ **Since:** {}",
                status.reason,
                timestamp::relative(status.start_time)
            ))
            .colour(embed::WARNING)
            .author(CreateEmbedAuthor::new(user.display_name()).icon_url(user.face()))
            .footer(CreateEmbedFooter::new("This member is away."));

        let reply = CreateMessage::new()
            .embed(notice)
            .reference_message(&message);
        match message.channel_id.send_message(&ctx.http, reply).await {
            Ok(sent) => delete_after(ctx.http.clone(), sent.channel_id, sent.id, AFK_NOTICE_TTL),
            Err(e) => tracing::warn!("Failed to send AFK notice: {:?}", e),
        }
    }
}

fn is_administrator(ctx: &Context, message: &Message) -> bool {
    message
        .author_permissions(&ctx.cache)
        .is_some_and(|permissions| permissions.administrator())
}

/// Removes the offending message, warns the channel and writes the moderation log.
async fn enforce(
    db: &DatabaseConnection,
    ctx: &Context,
    message: &Message,
    guild_id: serenity::all::GuildId,
    violation: Violation,
) {
    if let Err(e) = message.delete(&ctx.http).await {
        tracing::warn!("AutoMod could not delete message {}: {:?}", message.id, e);
        return;
    }

    tracing::info!(
        "AutoMod removed message {} from {} ({})",
        message.id,
        message.author.id,
        violation.reason()
    );

    let notice = CreateMessage::new().embed(embed::warning(format!(
        "<@{}> {}",
        message.author.id,
        violation.notice()
    )));
    match message.channel_id.send_message(&ctx.http, notice).await {
        Ok(sent) => delete_after(ctx.http.clone(), sent.channel_id, sent.id, AUTOMOD_NOTICE_TTL),
        Err(e) => tracing::warn!("Failed to send AutoMod notice: {:?}", e),
    }

    let log = embed::titled("🛡️ AutoMod Action")
        .colour(embed::ERROR)
        .field("Offender", format!("<@{}>", message.author.id), true)
        .field("Reason", violation.reason(), true)
        .field("Channel", format!("<#{}>", message.channel_id), true)
        .field("Deleted content", field_text(&message.content, "*Empty*"), false);
    send_log(db, &ctx.http, guild_id, log).await;
}

/// Deletes a short-lived notice once `ttl` has passed.
fn delete_after(http: Arc<Http>, channel_id: ChannelId, message_id: MessageId, ttl: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;
        if let Err(e) = http.delete_message(channel_id, message_id, None).await {
            tracing::debug!("Failed to delete notice {}: {:?}", message_id, e);
        }
    });
}
