//! Community challenges.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbedFooter, Permissions,
};

use crate::bot::command::guild_of;
use crate::bot::command::options::Options;
use crate::bot::command::profile::{grant_level_rewards, with_level_up};
use crate::bot::command::respond::{reply_embed, reply_private};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::challenge::{
    CreateChallengeParam, DEFAULT_CHALLENGE_XP, MAX_CHALLENGE_XP, MAX_DESCRIPTION_LENGTH,
    MAX_TITLE_LENGTH,
};
use crate::service::challenge::ChallengeService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("challenge").description("Show the active challenge"),
        CreateCommand::new("challenge_done").description("Mark the active challenge as done"),
        CreateCommand::new("challenge_new")
            .description("Start a new challenge for the server")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "title", "Title")
                    .required(true)
                    .max_length(MAX_TITLE_LENGTH as u16),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "description", "What to do")
                    .required(true)
                    .max_length(MAX_DESCRIPTION_LENGTH as u16),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "xp", "XP reward")
                    .min_int_value(1)
                    .max_int_value(MAX_CHALLENGE_XP as u64),
            ),
        CreateCommand::new("challenge_end")
            .description("Close the active challenge")
            .default_member_permissions(Permissions::ADMINISTRATOR),
    ]
}

pub async fn challenge(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;

    let Some(challenge) = ChallengeService::new(db).active(guild_id.get()).await? else {
        return reply_embed(
            ctx,
            command,
            embed::base(
                "🔥 Challenge",
                "💤 There is no active challenge right now. Watch the announcements!",
            ),
        )
        .await;
    };

    reply_embed(
        ctx,
        command,
        embed::base(
            format!("🔥 Active challenge: {}", challenge.title),
            challenge.description.clone(),
        )
        .colour(embed::ERROR)
        .field("Reward", format!("💎 {} XP", challenge.xp_reward), false)
        .footer(CreateEmbedFooter::new(format!(
            "Id: {} • Use /challenge_done when you finish.",
            challenge.id
        ))),
    )
    .await
}

pub async fn challenge_done(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;

    let completion = ChallengeService::new(db)
        .complete(guild_id.get(), command.user.id.get(), Utc::now())
        .await?;

    let embed = with_level_up(
        embed::base(
            "✅ Challenge completed!",
            format!(
                "Congratulations on your dedication. You earned **{} XP**.",
                completion.challenge.xp_reward
            ),
        )
        .colour(embed::SUCCESS),
        &completion.gain,
    );
    reply_embed(ctx, command, embed).await?;

    grant_level_rewards(db, &ctx.http, guild_id, command.user.id, &completion.gain).await;

    Ok(())
}

pub async fn challenge_new(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);

    let challenge = ChallengeService::new(db)
        .create(
            CreateChallengeParam {
                guild_id: guild_id.get(),
                title: options.required_string("title")?.to_string(),
                description: options.required_string("description")?.to_string(),
                xp_reward: options.integer("xp").unwrap_or(DEFAULT_CHALLENGE_XP),
            },
            Utc::now(),
        )
        .await?;

    tracing::info!("Challenge {} started in guild {}", challenge.id, guild_id);

    reply_embed(
        ctx,
        command,
        embed::base(
            "📢 New challenge!",
            format!(
                "**{}**\n{}\nReward: {} XP",
                challenge.title, challenge.description, challenge.xp_reward
            ),
        )
        .colour(embed::WARNING),
    )
    .await
}

pub async fn challenge_end(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;

    let challenge = ChallengeService::new(db).end(guild_id.get()).await?;

    reply_private(
        ctx,
        command,
        embed::success(format!("🔒 Challenge '{}' closed.", challenge.title)),
    )
    .await
}
