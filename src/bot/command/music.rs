//! Music commands, served by every profile.
//!
//! `MAIN` only plays when the guild has the music module on. Music bots always do.

use std::sync::Arc;

use serenity::all::{
    ChannelId, Colour, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateEmbed, CreateEmbedAuthor, GuildId, UserId,
};
use songbird::{Call, Songbird};
use tokio::sync::Mutex;

use crate::bot::command::options::Options;
use crate::bot::command::respond::{defer, edit_embed, reply_embed};
use crate::bot::command::{guild_of, require_module};
use crate::bot::embed;
use crate::bot::handler::Handler;
use crate::error::{internal::InternalError, AppError};
use crate::model::guild_config::GuildModule;
use crate::music::format::{format_time, progress_bar};
use crate::music::player::Enqueued;
use crate::music::queue::{LoopMode, PlayerState, Track};

const NOW_PLAYING_BAR_WIDTH: usize = 15;
const QUEUE_PAGE_SIZE: usize = 10;
const MAX_TITLE_LENGTH: usize = 256;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("play")
            .description("Play a song from a link or a search")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "query", "Link or search terms")
                    .required(true),
            ),
        CreateCommand::new("skip").description("Skip the current song"),
        CreateCommand::new("stop").description("Stop the music and leave the channel"),
        CreateCommand::new("pause").description("Pause the music"),
        CreateCommand::new("resume").description("Resume the music"),
        CreateCommand::new("queue").description("Show the queue"),
        CreateCommand::new("loop")
            .description("Change the loop mode")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "mode", "Loop mode")
                    .required(true)
                    .add_string_choice("Off", "off")
                    .add_string_choice("Track", "track")
                    .add_string_choice("Queue", "queue"),
            ),
        CreateCommand::new("nowplaying").description("Show the song being played"),
    ]
}

/// First bot other than `me` connected to `channel`.
///
/// Each voice state is `(user, connected channel, is a bot)`.
pub fn other_bot_in_channel(
    states: impl IntoIterator<Item = (UserId, Option<ChannelId>, bool)>,
    channel: ChannelId,
    me: UserId,
) -> Option<UserId> {
    states
        .into_iter()
        .find(|(user, connected, is_bot)| *is_bot && *user != me && *connected == Some(channel))
        .map(|(user, _, _)| user)
}

pub fn loop_label(mode: LoopMode) -> &'static str {
    match mode {
        LoopMode::Normal => "Off",
        LoopMode::Track => "🔂 Track",
        LoopMode::Queue => "🔁 Queue",
    }
}

fn duration_label(track: &Track) -> String {
    track
        .duration
        .map(format_time)
        .unwrap_or_else(|| "LIVE".to_string())
}

async fn guild_for_music(
    handler: &Handler,
    command: &CommandInteraction,
) -> Result<GuildId, AppError> {
    let guild_id = guild_of(command)?;

    if handler.profile.is_main() {
        require_module(&handler.db, guild_id, GuildModule::Music).await?;
    }

    Ok(guild_id)
}

async fn songbird(ctx: &Context) -> Result<Arc<Songbird>, AppError> {
    songbird::get(ctx)
        .await
        .ok_or_else(|| InternalError::VoiceNotInitialised.into())
}

async fn connected_call(ctx: &Context, guild_id: GuildId) -> Result<Arc<Mutex<Call>>, AppError> {
    songbird(ctx)
        .await?
        .get(guild_id)
        .ok_or_else(|| AppError::BadRequest("I am not connected to a voice channel.".to_string()))
}

/// Voice channel of `user_id` and another bot already connected to it, if any.
fn voice_channel_of(
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<(ChannelId, Option<UserId>), AppError> {
    let me = ctx.cache.current_user().id;
    let guild = ctx
        .cache
        .guild(guild_id)
        .ok_or_else(|| AppError::InternalError(format!("Guild {} is not cached", guild_id)))?;

    let Some(channel) = guild
        .voice_states
        .get(&user_id)
        .and_then(|state| state.channel_id)
    else {
        return Err(AppError::BadRequest(
            "You need to be in a voice channel.".to_string(),
        ));
    };

    let states = guild.voice_states.values().map(|state| {
        let is_bot = state
            .member
            .as_ref()
            .map(|member| member.user.bot)
            .or_else(|| guild.members.get(&state.user_id).map(|member| member.user.bot))
            .unwrap_or(false);
        (state.user_id, state.channel_id, is_bot)
    });

    Ok((channel, other_bot_in_channel(states, channel, me)))
}

pub async fn play(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_for_music(handler, command).await?;
    let query = Options::of(command).required_string("query")?;

    let (channel_id, other_bot) = voice_channel_of(ctx, guild_id, command.user.id)?;
    if let Some(other_bot) = other_bot {
        return Err(AppError::BadRequest(format!(
            "🚫 **Channel busy!** <@{}> is already in this channel. Use another voice \
             channel or run `/play` on that bot.",
            other_bot
        )));
    }

    defer(ctx, command, false).await?;

    let manager = songbird(ctx).await?;
    let call = match manager.get(guild_id) {
        Some(call) => {
            let current = call.lock().await.current_channel();
            match current {
                Some(current) if current.0.get() != channel_id.get() => {
                    return Err(AppError::BadRequest(format!(
                        "I am already playing in <#{}>.",
                        current.0
                    )));
                }
                Some(_) => call,
                None => manager.join(guild_id, channel_id).await?,
            }
        }
        None => manager.join(guild_id, channel_id).await?,
    };

    let track = handler.music.resolve(query, command.user.id.get()).await?;

    let embed = match handler.music.enqueue(guild_id, call, track).await? {
        Enqueued::Playing(track) => embed::base(
            "▶️ Now playing",
            format!("**[{}]({})** `{}`", track.title, track.url, duration_label(&track)),
        ),
        Enqueued::Queued { track, position } => embed::base(
            "✅ Added to the queue",
            format!(
                "**[{}]({})** `{}`\nPosition: **#{}**",
                track.title,
                track.url,
                duration_label(&track),
                position
            ),
        ),
    };

    edit_embed(ctx, command, embed).await
}

pub async fn skip(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_for_music(handler, command).await?;
    let call = connected_call(ctx, guild_id).await?;

    let description = match handler.music.skip(guild_id, call).await? {
        Some(track) => format!("Now playing **{}**.", track.title),
        None => "The queue is empty.".to_string(),
    };

    reply_embed(ctx, command, embed::base("⏭️ Skipped!", description)).await
}

pub async fn stop(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_for_music(handler, command).await?;
    let manager = songbird(ctx).await?;

    if manager.get(guild_id).is_none() {
        return Err(AppError::BadRequest(
            "I am not connected to a voice channel.".to_string(),
        ));
    }

    handler.music.stop(guild_id).await;
    manager.remove(guild_id).await?;

    tracing::info!("Music stopped in guild {}", guild_id);

    reply_embed(ctx, command, embed::base("👋 Player stopped", "See you next time!")).await
}

pub async fn pause(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_for_music(handler, command).await?;
    handler.music.pause(guild_id).await?;

    reply_embed(ctx, command, embed::base("⏸️ Paused", "Use /resume to continue.")).await
}

pub async fn resume(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_for_music(handler, command).await?;
    handler.music.resume(guild_id).await?;

    reply_embed(ctx, command, embed::base("▶️ Resumed", "Back to the music.")).await
}

pub async fn queue(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_for_music(handler, command).await?;
    let snapshot = handler.music.snapshot(guild_id).await;

    let Some(current) = &snapshot.current else {
        return reply_embed(
            ctx,
            command,
            embed::base("📜 Queue", "The queue is empty. Add songs with `/play`."),
        )
        .await;
    };

    let mut description = format!(
        "**Now:** {} `{}`\n\n",
        current.title,
        duration_label(current)
    );

    if snapshot.upcoming.is_empty() {
        description.push_str("*Nothing else queued.*");
    } else {
        for (index, track) in snapshot.upcoming.iter().take(QUEUE_PAGE_SIZE).enumerate() {
            description.push_str(&format!(
                "`{}.` {} `{}` • <@{}>\n",
                index + 1,
                track.title,
                duration_label(track),
                track.requester
            ));
        }
        if snapshot.upcoming.len() > QUEUE_PAGE_SIZE {
            description.push_str(&format!(
                "...and {} more",
                snapshot.upcoming.len() - QUEUE_PAGE_SIZE
            ));
        }
    }

    let embed = embed::base("📜 Queue", description)
        .field("🔄 Loop", loop_label(snapshot.loop_mode), true);

    reply_embed(ctx, command, embed).await
}

pub async fn set_loop(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_for_music(handler, command).await?;
    let mode: LoopMode = Options::of(command).required_string("mode")?.parse()?;

    handler.music.set_loop_mode(guild_id, mode).await;

    reply_embed(
        ctx,
        command,
        embed::base("🔄 Loop mode", format!("Loop is now **{}**.", loop_label(mode))),
    )
    .await
}

pub async fn now_playing(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_for_music(handler, command).await?;

    let Some(now) = handler.music.now_playing(guild_id).await else {
        return reply_embed(
            ctx,
            command,
            embed::base("⏹️ Player stopped", "Add songs with `/play`.").colour(Colour::DARK_GREY),
        )
        .await;
    };

    let status = match now.state {
        PlayerState::Paused => "⏸️ Paused",
        _ => "▶️ Now playing",
    };
    let title: String = now.track.title.chars().take(MAX_TITLE_LENGTH).collect();
    let next = now
        .next
        .as_ref()
        .map(|track| format!("**{}**", track.title))
        .unwrap_or_else(|| "*End of the queue...*".to_string());

    let embed = CreateEmbed::new()
        .colour(Colour::from_rgb(43, 45, 49))
        .author(CreateEmbedAuthor::new(status))
        .title(title)
        .url(now.track.url.clone())
        .description(format!(
            "`{}` {} `{}`",
            format_time(now.position),
            progress_bar(now.position, now.track.duration, NOW_PLAYING_BAR_WIDTH),
            duration_label(&now.track)
        ))
        .field("🔄 Loop", format!("`{}`", loop_label(now.loop_mode)), true)
        .field("👤 Requested by", format!("<@{}>", now.track.requester), true)
        .field("⏭️ Up next", next, false);

    reply_embed(ctx, command, embed).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_other_bots_in_the_same_channel() {
        let me = UserId::new(1);
        let channel = ChannelId::new(10);
        let states = vec![
            (me, Some(channel), true),
            (UserId::new(2), Some(channel), false),
            (UserId::new(3), Some(ChannelId::new(11)), true),
            (UserId::new(4), Some(channel), true),
        ];

        assert_eq!(
            other_bot_in_channel(states, channel, me),
            Some(UserId::new(4))
        );
    }

    #[test]
    fn ignores_itself_and_humans() {
        let me = UserId::new(1);
        let channel = ChannelId::new(10);
        let states = vec![(me, Some(channel), true), (UserId::new(2), Some(channel), false)];

        assert_eq!(other_bot_in_channel(states, channel, me), None);
    }
}
