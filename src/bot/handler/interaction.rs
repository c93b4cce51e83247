use serenity::all::{CommandInteraction, ComponentInteraction, Context, Interaction};

use crate::bot::command::{
    self,
    respond::{send_command_error, send_component_error},
    tag, ticket,
};
use crate::bot::handler::Handler;

/// Routes slash commands, button presses and autocomplete requests.
///
/// Failures are logged and the member gets the error's user-facing text.
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(handler, &ctx, &command).await,
        Interaction::Component(component) => handle_component(handler, &ctx, &component).await,
        Interaction::Autocomplete(autocomplete) => {
            if !handler.profile.is_main() {
                return;
            }

            if let Err(e) = tag::autocomplete(&handler.db, &ctx, &autocomplete).await {
                tracing::debug!(
                    "Failed to answer autocomplete for /{}: {}",
                    autocomplete.data.name,
                    e
                );
            }
        }
        _ => {}
    }
}

async fn handle_command(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    tracing::debug!(
        "[{}] /{} used by {} in guild {:?}",
        handler.profile,
        command.data.name,
        command.user.id,
        command.guild_id
    );

    if let Err(e) = command::dispatch(handler, ctx, command).await {
        tracing::error!(
            "[{}] Command /{} failed for user {}: {}",
            handler.profile,
            command.data.name,
            command.user.id,
            e
        );

        send_command_error(ctx, command, e.user_message()).await;
    }
}

async fn handle_component(handler: &Handler, ctx: &Context, component: &ComponentInteraction) {
    if !handler.profile.is_main() {
        return;
    }

    let result = match component.data.custom_id.as_str() {
        ticket::OPEN_BUTTON => ticket::open_ticket(&handler.db, ctx, component).await,
        ticket::CLOSE_BUTTON => ticket::close_ticket(&handler.db, ctx, component).await,
        other => {
            tracing::debug!("Ignoring component with unknown id '{}'", other);
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "Button '{}' failed for user {}: {}",
            component.data.custom_id,
            component.user.id,
            e
        );

        send_component_error(ctx, component, e.user_message()).await;
    }
}
