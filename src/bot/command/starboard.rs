//! Starboard settings and the star reaction listener.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, ChannelType, Colour, CommandInteraction, CommandOptionType, Context,
    CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedAuthor, CreateMessage,
    EditMessage, Message, MessageId, Permissions, Reaction, ReactionType,
};

use crate::bot::command::options::Options;
use crate::bot::command::respond::reply_private;
use crate::bot::command::guild_of;
use crate::bot::embed;
use crate::error::AppError;
use crate::model::starboard::{
    star_emoji, CreateStarboardEntryParam, StarboardConfig, DEFAULT_THRESHOLD, STAR_EMOJI,
};
use crate::service::starboard::{StarAction, StarboardService, MAX_THRESHOLD, MIN_THRESHOLD};

pub fn commands() -> Vec<CreateCommand> {
    vec![CreateCommand::new("config_starboard")
        .description("Set the channel where starred messages are highlighted")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(CommandOptionType::Channel, "channel", "Starboard channel")
                .required(true)
                .channel_types(vec![ChannelType::Text]),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "minimum",
                "Stars needed (default 3)",
            )
            .min_int_value(MIN_THRESHOLD as u64)
            .max_int_value(MAX_THRESHOLD as u64),
        )]
}

pub async fn config_starboard(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);
    let channel = options.required_channel("channel")?;
    let threshold = options
        .integer("minimum")
        .map(|value| i32::try_from(value).unwrap_or(i32::MAX))
        .unwrap_or(DEFAULT_THRESHOLD);

    let config = StarboardService::new(db)
        .configure(guild_id.get(), channel.id.get(), threshold)
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!(
            "**Starboard configured!**\nChannel: <#{}>\nMinimum: {} {}",
            config.channel_id, config.threshold, STAR_EMOJI
        )),
    )
    .await
}

/// Reposts a message to the starboard, or refreshes its count, when someone stars it.
pub async fn handle_reaction_add(db: &DatabaseConnection, ctx: &Context, reaction: &Reaction) {
    if !matches!(&reaction.emoji, ReactionType::Unicode(emoji) if emoji == STAR_EMOJI) {
        return;
    }
    let Some(guild_id) = reaction.guild_id else {
        return;
    };

    if let Err(e) = star(db, ctx, reaction, guild_id.get()).await {
        tracing::warn!(
            "Failed to update the starboard for message {}: {}",
            reaction.message_id,
            e
        );
    }
}

async fn star(
    db: &DatabaseConnection,
    ctx: &Context,
    reaction: &Reaction,
    guild_id: u64,
) -> Result<(), AppError> {
    let service = StarboardService::new(db);
    let Some(config) = service.config(guild_id).await? else {
        return Ok(());
    };

    let message = reaction.message(&ctx.http).await?;
    let stars = message
        .reactions
        .iter()
        .find(|r| matches!(&r.reaction_type, ReactionType::Unicode(e) if e == STAR_EMOJI))
        .map(|r| r.count)
        .unwrap_or(0);

    let action = service
        .evaluate(&config, reaction.channel_id.get(), message.id.get(), stars)
        .await?;

    let content = format!(
        "{} **{}** | <#{}>",
        star_emoji(stars),
        stars,
        reaction.channel_id
    );

    match action {
        StarAction::Ignore => Ok(()),
        StarAction::Update(entry) => {
            ChannelId::new(config.channel_id)
                .edit_message(
                    &ctx.http,
                    MessageId::new(entry.starboard_message_id),
                    EditMessage::new().content(content),
                )
                .await?;
            service.update_stars(entry.id, stars).await
        }
        StarAction::Post => post(&service, ctx, &config, &message, content, stars).await,
    }
}

async fn post(
    service: &StarboardService<'_>,
    ctx: &Context,
    config: &StarboardConfig,
    message: &Message,
    content: String,
    stars: u64,
) -> Result<(), AppError> {
    let mut highlight = CreateEmbed::new()
        .description(message.content.clone())
        .colour(Colour::GOLD)
        .author(
            CreateEmbedAuthor::new(message.author.display_name()).icon_url(message.author.face()),
        )
        .field(
            "Source",
            format!(
                "[Jump to message]({}) in <#{}>",
                message.link(),
                message.channel_id
            ),
            false,
        )
        .timestamp(message.timestamp);
    if let Some(attachment) = message.attachments.first() {
        highlight = highlight.image(attachment.url.clone());
    }

    let starboard = ChannelId::new(config.channel_id);
    let posted = starboard
        .send_message(
            &ctx.http,
            CreateMessage::new().content(content).embed(highlight),
        )
        .await?;

    let recorded = service
        .record(CreateStarboardEntryParam {
            guild_id: config.guild_id,
            original_message_id: message.id.get(),
            original_channel_id: message.channel_id.get(),
            starboard_message_id: posted.id.get(),
            stars: i32::try_from(stars).unwrap_or(i32::MAX),
        })
        .await;

    // Another star event reposted the message first
    if let Err(e) = recorded {
        if let Err(delete_err) = posted.delete(&ctx.http).await {
            tracing::warn!("Failed to remove duplicate starboard post: {:?}", delete_err);
        }
        return Err(e);
    }

    tracing::info!(
        "Message {} reached the starboard of guild {} with {} stars",
        message.id,
        config.guild_id,
        stars
    );

    Ok(())
}
