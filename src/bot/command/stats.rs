//! Server statistics channels.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandInteraction, Context, CreateChannel, CreateCommand, PermissionOverwrite,
    PermissionOverwriteType, Permissions,
};

use crate::bot::command::guild_of;
use crate::bot::command::respond::{defer, edit_embed};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::stats::{COUNT_PLACEHOLDER, DEFAULT_STAT_CHANNELS};
use crate::scheduler::stats::refresh_guild;
use crate::service::stats::StatsService;

const CATEGORY_NAME: &str = "📊 Statistics";

pub fn commands() -> Vec<CreateCommand> {
    vec![CreateCommand::new("setup_stats")
        .description("Create live statistics channels at the top of the server")
        .default_member_permissions(Permissions::ADMINISTRATOR)]
}

pub async fn setup_stats(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    defer(ctx, command, true).await?;

    let category = guild_id
        .create_channel(
            &ctx.http,
            CreateChannel::new(CATEGORY_NAME)
                .kind(ChannelType::Category)
                .position(0),
        )
        .await?;

    // Visible to everyone, joinable by nobody
    let locked = vec![PermissionOverwrite {
        allow: Permissions::VIEW_CHANNEL,
        deny: Permissions::CONNECT,
        kind: PermissionOverwriteType::Role(guild_id.everyone_role()),
    }];

    let service = StatsService::new(db);
    for (kind, name_format) in DEFAULT_STAT_CHANNELS {
        let channel = guild_id
            .create_channel(
                &ctx.http,
                CreateChannel::new(name_format.replace(COUNT_PLACEHOLDER, "..."))
                    .kind(ChannelType::Voice)
                    .category(category.id)
                    .permissions(locked.clone()),
            )
            .await?;

        service
            .register(guild_id.get(), channel.id.get(), kind, name_format)
            .await?;
    }

    tracing::info!("Statistics channels created in guild {}", guild_id);

    let stats = service.for_guild(guild_id.get()).await?;
    if let Err(e) = refresh_guild(db, &ctx.http, guild_id, &stats, Utc::now()).await {
        tracing::warn!("First statistics refresh of guild {} failed: {}", guild_id, e);
    }

    edit_embed(
        ctx,
        command,
        embed::success("**Statistics channels created!** They refresh every 10 minutes."),
    )
    .await
}
