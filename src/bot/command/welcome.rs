//! Welcome module settings.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, Permissions,
};

use crate::bot::command::options::Options;
use crate::bot::command::respond::reply_private;
use crate::bot::command::guild_of;
use crate::bot::embed;
use crate::error::AppError;
use crate::model::guild_config::{render_welcome, GuildSetting, WelcomePlaceholders};
use crate::service::guild_config::GuildConfigService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("welcome_channel")
            .description("Set the channel where new members are greeted")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::Channel, "channel", "Welcome channel")
                    .required(true)
                    .channel_types(vec![ChannelType::Text]),
            ),
        CreateCommand::new("welcome_message")
            .description("Set the welcome text")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "text",
                    "Use {user}, {name}, {server} and {count} as placeholders",
                )
                .required(true),
            ),
        CreateCommand::new("autorole")
            .description("Set the role new members receive")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::Role, "role", "Role to grant")
                    .required(true),
            ),
    ]
}

pub async fn welcome_channel(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let channel = Options::of(command).required_channel("channel")?;

    GuildConfigService::new(db)
        .set(guild_id.get(), GuildSetting::WelcomeChannel, Some(channel.id.get()))
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!(
            "New members will be greeted in <#{}>. The welcome module is on.",
            channel.id
        )),
    )
    .await
}

pub async fn welcome_message(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let text = Options::of(command).required_string("text")?;

    let config = GuildConfigService::new(db)
        .set_welcome_message(guild_id.get(), text)
        .await?;

    let (server, count) = ctx
        .cache
        .guild(guild_id)
        .map(|guild| (guild.name.clone(), guild.member_count))
        .unwrap_or_else(|| ("this server".to_string(), 0));

    let preview = render_welcome(
        &config.welcome_message_text,
        &WelcomePlaceholders {
            user: &format!("<@{}>", command.user.id),
            name: command.user.display_name(),
            server: &server,
            count,
        },
    );

    reply_private(
        ctx,
        command,
        embed::base("Welcome message updated", format!("**Preview:**\n\n{}", preview))
            .colour(embed::SUCCESS),
    )
    .await
}

pub async fn autorole(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let role = Options::of(command).required_role("role")?;

    if role.managed {
        return Err(AppError::BadRequest(
            "That role is managed by an integration and cannot be granted.".to_string(),
        ));
    }

    GuildConfigService::new(db)
        .set(guild_id.get(), GuildSetting::WelcomeRole, Some(role.id.get()))
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!("New members will receive **{}**.", role.name)),
    )
    .await
}
