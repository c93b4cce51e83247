use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditMember,
};

use crate::bot::command::guild_of;
use crate::bot::command::options::Options;
use crate::bot::command::respond::reply_private;
use crate::bot::embed;
use crate::error::AppError;
use crate::model::afk::{afk_nickname, is_afk_nickname};
use crate::service::afk::AfkService;

pub fn commands() -> Vec<CreateCommand> {
    vec![CreateCommand::new("afk")
        .description("Let others know you are away")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "reason",
            "Why you are leaving",
        ))]
}

pub async fn afk(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let reason = Options::of(command).string("reason");

    let display_name = command
        .member
        .as_ref()
        .map(|member| member.display_name().to_string())
        .unwrap_or_else(|| command.user.display_name().to_string());
    let nick = command.member.as_ref().and_then(|member| member.nick.clone());
    let already_afk = is_afk_nickname(&display_name);

    let original_nick = if already_afk { None } else { nick };
    let status = AfkService::new(db)
        .set(command.user.id.get(), guild_id.get(), reason, original_nick, Utc::now())
        .await?;

    if !already_afk {
        // Owners and members above the bot cannot be renamed
        if let Err(e) = guild_id
            .edit_member(
                &ctx.http,
                command.user.id,
                EditMember::new().nickname(afk_nickname(&display_name)),
            )
            .await
        {
            tracing::debug!("Could not set AFK nickname for {}: {:?}", command.user.id, e);
        }
    }

    let embed = embed::base(
        "💤 AFK enabled",
        format!(
            "I will let anyone who mentions you know.\n**Reason:** {}",
            status.reason
        ),
    )
    .colour(serenity::all::Colour::DARK_PURPLE);

    reply_private(ctx, command, embed).await
}
