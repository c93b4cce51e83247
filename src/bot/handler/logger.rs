//! Server event log.
//!
//! Message edits and deletions, member joins and departures and voice channel moves are
//! posted to the guild's log channel. Guilds without a log channel are skipped.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Colour, Context, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter,
    CreateMessage, GuildId, Http, Member, Message, MessageId, MessageUpdateEvent, User,
    VoiceState,
};

use crate::bot::embed;
use crate::service::guild_config::GuildConfigService;

/// Discord's embed field length limit.
const MAX_FIELD_LENGTH: usize = 1024;

/// Accounts younger than this are flagged when they join.
const NEW_ACCOUNT_AGE: Duration = Duration::days(1);

/// Configured log channel of a guild.
pub async fn log_channel(db: &DatabaseConnection, guild_id: GuildId) -> Option<ChannelId> {
    match GuildConfigService::new(db).find(guild_id.get()).await {
        Ok(config) => config.and_then(|c| c.log_channel_id).map(ChannelId::new),
        Err(e) => {
            tracing::error!("Failed to load log channel of guild {}: {:?}", guild_id, e);
            None
        }
    }
}

/// Posts an embed to the guild's log channel, if one is configured.
pub async fn send_log(db: &DatabaseConnection, http: &Http, guild_id: GuildId, embed: CreateEmbed) {
    let Some(channel_id) = log_channel(db, guild_id).await else {
        return;
    };

    if let Err(e) = channel_id
        .send_message(http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::warn!("Failed to write to the log channel of guild {}: {:?}", guild_id, e);
    }
}

/// Message text for an embed field, truncated to the field limit.
pub fn field_text(content: &str, empty: &str) -> String {
    if content.trim().is_empty() {
        return empty.to_string();
    }
    content.chars().take(MAX_FIELD_LENGTH).collect()
}

pub fn is_new_account(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - created_at < NEW_ACCOUNT_AGE
}

/// How a member's voice channel changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransition {
    Joined(ChannelId),
    Left(ChannelId),
    Moved { from: ChannelId, to: ChannelId },
}

impl VoiceTransition {
    /// `None` for mute, deafen and stream changes inside the same channel.
    pub fn between(before: Option<ChannelId>, after: Option<ChannelId>) -> Option<Self> {
        match (before, after) {
            (None, Some(to)) => Some(VoiceTransition::Joined(to)),
            (Some(from), None) => Some(VoiceTransition::Left(from)),
            (Some(from), Some(to)) if from != to => Some(VoiceTransition::Moved { from, to }),
            _ => None,
        }
    }

    fn describe(&self) -> (String, Colour) {
        match self {
            VoiceTransition::Joined(to) => (format!("🔊 Joined <#{}>", to), embed::SUCCESS),
            VoiceTransition::Left(from) => (format!("🔇 Left <#{}>", from), embed::ERROR),
            VoiceTransition::Moved { from, to } => {
                (format!("➡️ Moved from <#{}> to <#{}>", from, to), embed::INFO)
            }
        }
    }
}

pub async fn handle_message_update(
    db: &DatabaseConnection,
    ctx: Context,
    old: Option<Message>,
    new: Option<Message>,
    event: MessageUpdateEvent,
) {
    // Without the cached original there is nothing to compare against
    let Some(old) = old else {
        return;
    };
    let Some(guild_id) = event.guild_id else {
        return;
    };
    if old.author.bot {
        return;
    }

    let after = new
        .map(|message| message.content)
        .or(event.content)
        .unwrap_or_default();
    if after == old.content {
        return;
    }

    let embed = CreateEmbed::new()
        .title("✏️ Message edited")
        .colour(Colour::ORANGE)
        .author(CreateEmbedAuthor::new(old.author.display_name()).icon_url(old.author.face()))
        .field("Channel", format!("<#{}>", event.channel_id), false)
        .field("Before", field_text(&old.content, "*No text content*"), false)
        .field("After", field_text(&after, "*No text content*"), false)
        .footer(CreateEmbedFooter::new(format!("ID: {}", event.id)))
        .timestamp(serenity::all::Timestamp::now());

    send_log(db, &ctx.http, guild_id, embed).await;
}

pub async fn handle_message_delete(
    db: &DatabaseConnection,
    ctx: Context,
    channel_id: ChannelId,
    message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    let Some(guild_id) = guild_id else {
        return;
    };
    // Only messages still in the cache can be shown
    let Some(message) = ctx
        .cache
        .message(channel_id, message_id)
        .map(|message| message.clone())
    else {
        return;
    };
    if message.author.bot {
        return;
    }

    let mut embed = CreateEmbed::new()
        .title("🗑️ Message deleted")
        .colour(embed::ERROR)
        .author(
            CreateEmbedAuthor::new(message.author.display_name()).icon_url(message.author.face()),
        )
        .field("Channel", format!("<#{}>", channel_id), false)
        .field("Content", field_text(&message.content, "*Attachment or embed only*"), false)
        .footer(CreateEmbedFooter::new(format!("ID: {}", message_id)))
        .timestamp(serenity::all::Timestamp::now());

    if !message.attachments.is_empty() {
        embed = embed.field(
            "Attachments",
            format!("{} file(s)", message.attachments.len()),
            false,
        );
    }

    send_log(db, &ctx.http, guild_id, embed).await;
}

pub async fn handle_member_join(db: &DatabaseConnection, ctx: &Context, member: &Member) {
    let created_at = DateTime::<Utc>::from_timestamp(member.user.created_at().unix_timestamp(), 0)
        .unwrap_or_else(Utc::now);
    let new_account = is_new_account(created_at, Utc::now());

    let description = if new_account {
        format!("<@{}> ⚠️ **New account!** Be careful.", member.user.id)
    } else {
        format!("<@{}>", member.user.id)
    };

    let embed = CreateEmbed::new()
        .title("📥 Member joined")
        .description(description)
        .colour(if new_account { embed::ERROR } else { embed::SUCCESS })
        .thumbnail(member.face())
        .field("Account created", format!("<t:{}:R>", created_at.timestamp()), true)
        .field("ID", member.user.id.to_string(), true)
        .timestamp(serenity::all::Timestamp::now());

    send_log(db, &ctx.http, member.guild_id, embed).await;
}

pub async fn handle_member_leave(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    member: Option<Member>,
) {
    let mut embed = CreateEmbed::new()
        .title("📤 Member left")
        .description(format!("<@{}> ({})", user.id, user.display_name()))
        .colour(Colour::DARK_GREY)
        .thumbnail(user.face())
        .timestamp(serenity::all::Timestamp::now());

    if let Some(member) = member {
        embed = embed.field("Roles", member.roles.len().to_string(), true);
    }

    send_log(db, &ctx.http, guild_id, embed).await;
}

pub async fn handle_voice_state_update(
    db: &DatabaseConnection,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };
    let before = old.and_then(|state| state.channel_id);
    let Some(transition) = VoiceTransition::between(before, new.channel_id) else {
        return;
    };

    let name = new
        .member
        .as_ref()
        .map(|member| member.display_name().to_string())
        .unwrap_or_else(|| format!("<@{}>", new.user_id));
    let (change, colour) = transition.describe();

    let embed = CreateEmbed::new()
        .description(format!("**{}**: {}", name, change))
        .colour(colour)
        .footer(CreateEmbedFooter::new(Utc::now().format("%H:%M:%S").to_string()));

    send_log(db, &ctx.http, guild_id, embed).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_voice_changes() {
        let a = ChannelId::new(1);
        let b = ChannelId::new(2);

        assert_eq!(VoiceTransition::between(None, Some(a)), Some(VoiceTransition::Joined(a)));
        assert_eq!(VoiceTransition::between(Some(a), None), Some(VoiceTransition::Left(a)));
        assert_eq!(
            VoiceTransition::between(Some(a), Some(b)),
            Some(VoiceTransition::Moved { from: a, to: b })
        );
        assert_eq!(VoiceTransition::between(Some(a), Some(a)), None);
        assert_eq!(VoiceTransition::between(None, None), None);
    }

    #[test]
    fn truncates_long_fields() {
        let long = "x".repeat(2000);
        assert_eq!(field_text(&long, "-").chars().count(), MAX_FIELD_LENGTH);
        assert_eq!(field_text("  ", "*empty*"), "*empty*");
        assert_eq!(field_text("hi", "*empty*"), "hi");
    }

    #[test]
    fn flags_accounts_younger_than_a_day() {
        let now = Utc::now();
        assert!(is_new_account(now - Duration::hours(3), now));
        assert!(!is_new_account(now - Duration::days(30), now));
    }
}
