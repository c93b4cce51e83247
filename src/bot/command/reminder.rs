use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::command::options::Options;
use crate::bot::command::respond::reply_private;
use crate::bot::embed;
use crate::error::AppError;
use crate::service::reminder::ReminderService;
use crate::util::duration::parse_duration;
use crate::util::timestamp;

pub fn commands() -> Vec<CreateCommand> {
    vec![CreateCommand::new("remind")
        .description("Get a reminder in the future")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "duration",
                "How long from now (e.g. 30s, 10m, 1h, 2d)",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "message", "What to remind you of")
                .required(true),
        )]
}

pub async fn remind(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = Options::of(command);
    let delay = parse_duration(options.required_string("duration")?)?;
    let message = options.required_string("message")?;

    let reminder = ReminderService::new(db)
        .create(
            command.user.id.get(),
            command.channel_id.get(),
            message,
            delay,
            Utc::now(),
        )
        .await?;

    tracing::debug!(
        "Reminder {} for {} due at {}",
        reminder.id,
        reminder.user_id,
        reminder.due_at
    );

    reply_private(
        ctx,
        command,
        embed::success(format!(
            "I will remind you about *{}* {}.",
            reminder.message,
            timestamp::relative(reminder.due_at)
        )),
    )
    .await
}
