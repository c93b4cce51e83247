//! Personal goals.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbedFooter,
};

use crate::bot::command::guild_of;
use crate::bot::command::options::Options;
use crate::bot::command::profile::{grant_level_rewards, with_level_up};
use crate::bot::command::respond::{reply_embed, reply_private};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::goal::{GOAL_XP, MAX_GOAL_LENGTH};
use crate::service::goal::GoalService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("goal_new")
            .description("Set a new goal for today")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "description",
                    "What is your goal? (e.g. Read 10 pages)",
                )
                .required(true)
                .max_length(MAX_GOAL_LENGTH as u16),
            ),
        CreateCommand::new("goals").description("List your pending goals"),
        CreateCommand::new("goal_done")
            .description("Mark a goal as done and earn XP")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "id", "Goal id (see /goals)")
                    .required(true)
                    .min_int_value(1),
            ),
    ]
}

pub async fn goal_new(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let description = Options::of(command).required_string("description")?;

    let goal = GoalService::new(db)
        .create(command.user.id.get(), description, Utc::now())
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!(
            "**Goal set!** Id: `{}`\n🎯 *{}*\nUse `/goal_done {}` when you finish.",
            goal.id, goal.description, goal.id
        )),
    )
    .await
}

pub async fn goals(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let goals = GoalService::new(db).pending(command.user.id.get()).await?;

    if goals.is_empty() {
        return reply_private(
            ctx,
            command,
            embed::base(
                "📋 Goals",
                "🎉 You have no pending goals! Use `/goal_new` to create one.",
            ),
        )
        .await;
    }

    let list = goals
        .iter()
        .map(|goal| format!("**#{}** - {}", goal.id, goal.description))
        .collect::<Vec<_>>()
        .join("\n");

    reply_private(
        ctx,
        command,
        embed::base(format!("📋 Goals of {}", command.user.display_name()), list)
            .colour(Colour::ORANGE)
            .footer(CreateEmbedFooter::new("Focus on the process.")),
    )
    .await
}

pub async fn goal_done(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let id = Options::of(command).required_integer("id")?;
    let goal_id = i32::try_from(id)
        .map_err(|_| AppError::NotFound(format!("Goal #{} not found.", id)))?;

    let completion = GoalService::new(db)
        .complete(command.user.id.get(), goal_id, Utc::now())
        .await?;

    let embed = with_level_up(
        embed::base(
            "✅ Goal completed!",
            format!(
                "~~{}~~\n💎 You earned **{} XP** for your discipline.",
                completion.goal.description, GOAL_XP
            ),
        )
        .colour(embed::SUCCESS),
        &completion.gain,
    );
    reply_embed(ctx, command, embed).await?;

    grant_level_rewards(db, &ctx.http, guild_id, command.user.id, &completion.gain).await;

    Ok(())
}
