use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption, GuildId,
    Http, UserId,
};

use crate::bot::command::guild_of;
use crate::bot::command::options::Options;
use crate::bot::command::respond::{reply_embed, reply_private};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::birthday::Birthday;
use crate::service::birthday::BirthdayService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("birthday")
            .description("Set your birthday")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "day", "Day (1-31)")
                    .required(true)
                    .min_int_value(1)
                    .max_int_value(31),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "month", "Month (1-12)")
                    .required(true)
                    .min_int_value(1)
                    .max_int_value(12),
            ),
        CreateCommand::new("birthdays").description("See whose birthday is today"),
    ]
}

pub async fn birthday(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = Options::of(command);
    let day = to_date_part(options.required_integer("day")?)?;
    let month = to_date_part(options.required_integer("month")?)?;

    let birthday = BirthdayService::new(db)
        .set(command.user.id.get(), day, month)
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!(
            "Birthday set to **{:02}/{:02}**. I will remember!",
            birthday.day, birthday.month
        )),
    )
    .await
}

fn to_date_part(value: i64) -> Result<u32, AppError> {
    u32::try_from(value).map_err(|_| AppError::BadRequest("That is not a valid date.".to_string()))
}

pub async fn birthdays(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;

    let today = BirthdayService::new(db).today(Utc::now()).await?;
    let present = members_of(&ctx.http, guild_id, today).await;

    let description = if present.is_empty() {
        "📅 Nobody on this server has a birthday today.".to_string()
    } else {
        present
            .iter()
            .map(|birthday| format!("<@{}>", birthday.user_id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    reply_embed(ctx, command, embed::base("🎂 Today's birthdays", description)).await
}

/// Keeps the birthdays of users who are members of `guild_id`.
pub async fn members_of(http: &Http, guild_id: GuildId, birthdays: Vec<Birthday>) -> Vec<Birthday> {
    let mut present = Vec::new();

    for birthday in birthdays {
        match http.get_member(guild_id, UserId::new(birthday.user_id)).await {
            Ok(_) => present.push(birthday),
            Err(e) => tracing::trace!(
                "User {} is not in guild {}: {:?}",
                birthday.user_id,
                guild_id,
                e
            ),
        }
    }

    present
}
