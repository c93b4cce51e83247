//! Database backups on demand.

use chrono::Utc;
use serenity::all::{
    CommandInteraction, Context, CreateAttachment, CreateCommand, CreateMessage, Permissions,
};

use crate::bot::command::respond::{defer, edit_embed};
use crate::bot::embed;
use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::service::backup::BackupService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("backup_create")
            .description("Take a database backup now")
            .default_member_permissions(Permissions::ADMINISTRATOR),
        CreateCommand::new("backup_download")
            .description("Receive the latest database backup by DM")
            .default_member_permissions(Permissions::ADMINISTRATOR),
    ]
}

pub async fn backup_create(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    defer(ctx, command, true).await?;

    let path = BackupService::new(&handler.db, &handler.backups)
        .create(Utc::now())
        .await?;
    let size = tokio::fs::metadata(&path).await?.len();

    tracing::info!("{} requested backup {}", command.user.id, path.display());

    edit_embed(
        ctx,
        command,
        embed::success(format!(
            "Backup written: `{}` ({:.2} MB)",
            file_name(&path),
            size as f64 / (1024.0 * 1024.0)
        )),
    )
    .await
}

pub async fn backup_download(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    defer(ctx, command, true).await?;

    let service = BackupService::new(&handler.db, &handler.backups);
    let path = match service.latest().await? {
        Some(path) => path,
        None => service.create(Utc::now()).await?,
    };

    let attachment = CreateAttachment::path(&path).await?;
    let message = CreateMessage::new()
        .content(format!("📦 Database backup `{}`", file_name(&path)))
        .add_file(attachment);

    if let Err(e) = command.user.direct_message(&ctx.http, message).await {
        tracing::warn!("Failed to DM backup to {}: {:?}", command.user.id, e);
        return Err(AppError::BadRequest(
            "I could not DM you. Open your direct messages and try again.".to_string(),
        ));
    }

    edit_embed(ctx, command, embed::success("Backup sent by DM.")).await
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
