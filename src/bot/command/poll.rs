//! Reaction polls.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Colour, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage,
    EditMessage, MessageId, Permissions, ReactionType,
};

use crate::bot::command::options::Options;
use crate::bot::command::respond::{defer, edit_embed, reply_embed};
use crate::bot::command::guild_of;
use crate::bot::discord_error::is_unknown_resource;
use crate::bot::embed;
use crate::error::AppError;
use crate::model::poll::{CreatePollParam, NUMBER_EMOJIS};
use crate::service::poll::{parse_options, render_results, tally, PollService, ReactionCount};

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("poll")
            .description("Start a public poll")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "question", "What is asked")
                    .required(true)
                    .max_length(200),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "options",
                    "Answers separated by | (e.g. Pizza|Burger|Salad)",
                )
                .required(true),
            ),
        CreateCommand::new("poll_close")
            .description("Close a poll and post the results")
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "message_id",
                    "ID of the poll message",
                )
                .required(true),
            ),
    ]
}

pub async fn poll(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);
    let question = options.required_string("question")?.trim();
    let answers = parse_options(options.required_string("options")?)?;

    let description = answers
        .iter()
        .zip(NUMBER_EMOJIS)
        .map(|(answer, emoji)| format!("{} **{}**", emoji, answer))
        .collect::<Vec<_>>()
        .join("\n\n");

    let poll_embed = CreateEmbed::new()
        .title(format!("📊 {}", question))
        .description(description)
        .colour(Colour::GOLD)
        .author(CreateEmbedAuthor::new(command.user.display_name()).icon_url(command.user.face()))
        .footer(CreateEmbedFooter::new("React below to vote!"));

    reply_embed(ctx, command, poll_embed).await?;

    let message = command.get_response(&ctx.http).await?;
    for emoji in NUMBER_EMOJIS.iter().take(answers.len()) {
        message
            .react(&ctx.http, ReactionType::Unicode(emoji.to_string()))
            .await?;
    }

    let poll = PollService::new(db)
        .create(CreatePollParam {
            guild_id: guild_id.get(),
            channel_id: command.channel_id.get(),
            message_id: message.id.get(),
            author_id: command.user.id.get(),
            question: question.to_string(),
            options: answers,
        })
        .await?;

    tracing::info!("Poll {} opened by {} in guild {}", poll.id, command.user.id, guild_id);

    Ok(())
}

pub async fn poll_close(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let message_id = Options::of(command)
        .required_string("message_id")?
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::BadRequest("That is not a valid message ID.".to_string()))?;

    defer(ctx, command, true).await?;

    let poll = PollService::new(db).close(guild_id.get(), message_id).await?;
    let channel_id = ChannelId::new(poll.channel_id);

    let mut message = match ctx
        .http
        .get_message(channel_id, MessageId::new(poll.message_id))
        .await
    {
        Ok(message) => message,
        Err(e) if is_unknown_resource(&e) => {
            return Err(AppError::NotFound(
                "The poll message no longer exists; the poll was closed without results."
                    .to_string(),
            ))
        }
        Err(e) => return Err(e.into()),
    };

    let reactions: Vec<ReactionCount> = message
        .reactions
        .iter()
        .filter_map(|reaction| match &reaction.reaction_type {
            ReactionType::Unicode(emoji) => Some(ReactionCount {
                emoji: emoji.clone(),
                count: reaction.count,
                me: reaction.me,
            }),
            _ => None,
        })
        .collect();
    let votes = tally(poll.options.len(), &reactions);

    if let Some(original) = message.embeds.first().cloned() {
        let closed = CreateEmbed::from(original)
            .colour(Colour::LIGHT_GREY)
            .footer(CreateEmbedFooter::new("🔴 Poll closed"));
        message
            .edit(&ctx.http, EditMessage::new().embed(closed))
            .await?;
    }

    let results = embed::base(
        "📊 Poll results",
        render_results(&poll.question, &poll.options, &votes),
    )
    .colour(embed::SUCCESS);
    channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(results))
        .await?;

    tracing::info!("Poll {} closed by {}", poll.id, command.user.id);

    edit_embed(ctx, command, embed::success("Poll closed.")).await
}
