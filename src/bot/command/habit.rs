//! Habit tracking with daily check-ins.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbedFooter,
};

use crate::bot::command::guild_of;
use crate::bot::command::options::Options;
use crate::bot::command::profile::{grant_level_rewards, with_level_up};
use crate::bot::command::respond::{reply_embed, reply_private};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::habit::{StreakChange, MAX_HABIT_NAME_LENGTH};
use crate::service::habit::HabitService;

/// Streaks above this many days get the fire icon.
const HOT_STREAK: i32 = 2;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("habit_new")
            .description("Start tracking a new habit")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "name",
                    "Habit name (e.g. Cold shower, Reading)",
                )
                .required(true)
                .max_length(MAX_HABIT_NAME_LENGTH as u16),
            ),
        CreateCommand::new("habits").description("Show your habits and streaks"),
        CreateCommand::new("checkin")
            .description("Mark a habit as done today")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "habit_id",
                    "Habit id (see /habits)",
                )
                .required(true)
                .min_int_value(1),
            ),
    ]
}

pub async fn habit_new(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let name = Options::of(command).required_string("name")?;

    let habit = HabitService::new(db)
        .create(command.user.id.get(), name, Utc::now())
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!(
            "Habit **{}** created! Id: `{}`. Remember to `/checkin` every day.",
            habit.name, habit.id
        )),
    )
    .await
}

pub async fn habits(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let habits = HabitService::new(db).for_user(command.user.id.get()).await?;

    if habits.is_empty() {
        return reply_private(
            ctx,
            command,
            embed::base("📅 Your habits", "You track no habits yet. Use `/habit_new`."),
        )
        .await;
    }

    let mut list = embed::titled("📅 Your habits")
        .colour(embed::INFO)
        .footer(CreateEmbedFooter::new("Consistency is key."));
    for habit in habits {
        let icon = if habit.current_streak > HOT_STREAK { "🔥" } else { "🌱" };
        list = list.field(
            format!("{} {} (id: {})", icon, habit.name, habit.id),
            format!(
                "Current streak: **{}** days\nRecord: {} days",
                habit.current_streak, habit.longest_streak
            ),
            false,
        );
    }

    reply_private(ctx, command, list).await
}

pub async fn checkin(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let id = Options::of(command).required_integer("habit_id")?;
    let habit_id =
        i32::try_from(id).map_err(|_| AppError::NotFound("Habit not found.".to_string()))?;

    let check_in = HabitService::new(db)
        .check_in(command.user.id.get(), habit_id, Utc::now())
        .await?;

    let streak = match check_in.change {
        StreakChange::Started => "🚀 You started your streak! 1 day.".to_string(),
        StreakChange::Kept => format!(
            "🔥 Streak kept! **{} days**.",
            check_in.habit.current_streak
        ),
        StreakChange::Lost { previous } => format!(
            "⚠️ Streak lost (it was {} days). Starting over!",
            previous
        ),
    };

    let embed = with_level_up(
        embed::base(
            format!("✅ Check-in done! ({})", check_in.habit.name),
            format!("{}\n💎 You earned **{} XP**.", streak, check_in.xp),
        )
        .colour(embed::SUCCESS),
        &check_in.gain,
    );
    reply_embed(ctx, command, embed).await?;

    grant_level_rewards(db, &ctx.http, guild_id, command.user.id, &check_in.gain).await;

    Ok(())
}
