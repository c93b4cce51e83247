use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
    EditInteractionResponse,
};

use crate::bot::embed;
use crate::error::AppError;

pub async fn reply(
    ctx: &Context,
    command: &CommandInteraction,
    message: CreateInteractionResponseMessage,
) -> Result<(), AppError> {
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

pub async fn reply_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    reply(ctx, command, CreateInteractionResponseMessage::new().embed(embed)).await
}

/// Replies with an embed only the caller can see.
pub async fn reply_private(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    reply(
        ctx,
        command,
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true),
    )
    .await
}

/// Acknowledges a command whose work may take longer than the interaction deadline.
pub async fn defer(
    ctx: &Context,
    command: &CommandInteraction,
    ephemeral: bool,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(
                CreateInteractionResponseMessage::new().ephemeral(ephemeral),
            ),
        )
        .await?;

    Ok(())
}

/// Fills in the response of a deferred command.
pub async fn edit_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await?;

    Ok(())
}

/// Reports a failed command to its caller.
///
/// Answers the interaction when it has not been answered yet, otherwise sends an
/// ephemeral follow-up.
pub async fn send_command_error(ctx: &Context, command: &CommandInteraction, text: String) {
    let message = CreateInteractionResponseMessage::new()
        .embed(embed::error(text.clone()))
        .ephemeral(true);

    if command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
        .is_ok()
    {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .embed(embed::error(text))
        .ephemeral(true);
    if let Err(e) = command.create_followup(&ctx.http, followup).await {
        tracing::warn!("Failed to report command error: {:?}", e);
    }
}

/// Same as `send_command_error` for button presses.
pub async fn send_component_error(ctx: &Context, component: &ComponentInteraction, text: String) {
    let message = CreateInteractionResponseMessage::new()
        .embed(embed::error(text.clone()))
        .ephemeral(true);

    if component
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
        .is_ok()
    {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .embed(embed::error(text))
        .ephemeral(true);
    if let Err(e) = component.create_followup(&ctx.http, followup).await {
        tracing::warn!("Failed to report button error: {:?}", e);
    }
}
