//! Free game announcements.

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, Permissions,
};

use crate::bot::command::guild_of;
use crate::bot::command::options::Options;
use crate::bot::command::respond::{defer, edit_embed, reply_private};
use crate::bot::embed;
use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::scheduler::deals::announce_deals;
use crate::service::deals::DealsService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("config_deals")
            .description("Set the channel that receives free games")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::Channel, "channel", "Channel")
                    .required(true)
                    .channel_types(vec![ChannelType::Text, ChannelType::News]),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::Role,
                "role",
                "Role mentioned with each free game",
            )),
        CreateCommand::new("deals_test")
            .description("Check for free games now")
            .default_member_permissions(Permissions::ADMINISTRATOR),
    ]
}

pub async fn config_deals(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);
    let channel = options.required_channel("channel")?;
    let role_id = options.role("role").map(|role| role.id.get());

    DealsService::new(&handler.db)
        .configure(guild_id.get(), channel.id.get(), role_id)
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!("Free games will appear in <#{}>.", channel.id)),
    )
    .await
}

pub async fn deals_test(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    guild_of(command)?;
    defer(ctx, command, true).await?;

    let posted = announce_deals(&handler.db, &ctx.http, &handler.web).await?;

    let description = if posted == 0 {
        "No new free games right now.".to_string()
    } else {
        format!("Free game posted to {} server(s).", posted)
    };

    edit_embed(
        ctx,
        command,
        embed::base("🔎 Manual check", description).colour(embed::INFO),
    )
    .await
}
