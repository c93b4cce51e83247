use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::command;
use crate::config::BotProfile;

/// Sets the presence and registers the slash commands of this profile.
pub async fn handle_ready(ctx: Context, ready: Ready, profile: BotProfile) {
    tracing::info!("{} is connected to Discord as {}!", ready.user.name, profile);

    let activity = if profile.is_main() {
        ActivityData::watching("Dream Club Members")
    } else {
        ActivityData::listening("high quality music")
    };
    ctx.set_activity(Some(activity));

    match Command::set_global_commands(&ctx.http, command::definitions(profile)).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
