//! Private support channels opened from a button panel.

use std::time::Duration;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ButtonStyle, ChannelId, ChannelType, Colour, CommandInteraction, ComponentInteraction,
    Context, CreateActionRow, CreateButton, CreateChannel, CreateCommand,
    CreateInteractionResponseFollowup, CreateMessage, GuildChannel, GuildId, PermissionOverwrite,
    PermissionOverwriteType, Permissions,
};

use crate::bot::command::respond::{defer, edit_embed};
use crate::bot::command::{guild_of, require_module};
use crate::bot::discord_error::is_unknown_resource;
use crate::bot::embed;
use crate::error::AppError;
use crate::model::guild_config::{GuildModule, GuildSetting};
use crate::model::ticket::ticket_channel_name;
use crate::service::guild_config::GuildConfigService;
use crate::service::ticket::TicketService;

pub const OPEN_BUTTON: &str = "ticket_open";
pub const CLOSE_BUTTON: &str = "ticket_close";

const CATEGORY_NAME: &str = "📩 Support";
const DELETE_DELAY: Duration = Duration::from_secs(5);

pub fn commands() -> Vec<CreateCommand> {
    vec![CreateCommand::new("setup_tickets")
        .description("Create the support category and post the ticket panel here")
        .default_member_permissions(Permissions::ADMINISTRATOR)]
}

pub async fn setup_tickets(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    require_module(db, guild_id, GuildModule::Tickets).await?;

    defer(ctx, command, true).await?;

    let category = guild_id
        .create_channel(
            &ctx.http,
            CreateChannel::new(CATEGORY_NAME).kind(ChannelType::Category),
        )
        .await?;

    GuildConfigService::new(db)
        .set(
            guild_id.get(),
            GuildSetting::TicketCategory,
            Some(category.id.get()),
        )
        .await?;

    let panel = embed::base(
        "Help center",
        "Need to talk to the staff? Press the button below to open a private ticket.",
    )
    .colour(Colour::BLURPLE);

    let button = CreateButton::new(OPEN_BUTTON)
        .label("Open ticket")
        .emoji('📩')
        .style(ButtonStyle::Primary);

    command
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(panel)
                .components(vec![CreateActionRow::Buttons(vec![button])]),
        )
        .await?;

    tracing::info!("Ticket panel set up in guild {}", guild_id);

    edit_embed(ctx, command, embed::success("The ticket system is ready!")).await
}

/// Opens a private ticket channel for the member who pressed the panel button.
pub async fn open_ticket(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let guild_id = component_guild(component)?;
    require_module(db, guild_id, GuildModule::Tickets).await?;

    let config = GuildConfigService::new(db).get_or_create(guild_id.get()).await?;
    let Some(category_id) = config.ticket_category_id else {
        return Err(AppError::BadRequest(
            "The ticket system is not set up. Please contact an admin.".to_string(),
        ));
    };

    let user = &component.user;
    let service = TicketService::new(db);
    let http = ctx.http.clone();
    service
        .ensure_can_open(guild_id.get(), user.id.get(), move |channel_id| async move {
            match http.get_channel(ChannelId::new(channel_id)).await {
                Ok(_) => Ok(true),
                Err(e) if is_unknown_resource(&e) => Ok(false),
                Err(e) => Err(e.into()),
            }
        })
        .await?;

    component.defer_ephemeral(&ctx.http).await?;

    let bot_id = ctx.cache.current_user().id;
    let visible = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;
    let overwrites = vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            kind: PermissionOverwriteType::Role(guild_id.everyone_role()),
        },
        PermissionOverwrite {
            allow: visible,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(user.id),
        },
        PermissionOverwrite {
            allow: visible | Permissions::MANAGE_CHANNELS,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(bot_id),
        },
    ];

    let channel = guild_id
        .create_channel(
            &ctx.http,
            CreateChannel::new(ticket_channel_name(&user.name))
                .kind(ChannelType::Text)
                .category(ChannelId::new(category_id))
                .permissions(overwrites),
        )
        .await?;

    service
        .open(guild_id.get(), channel.id.get(), user.id.get(), Utc::now())
        .await?;

    tracing::info!("Opened ticket {} for {} in guild {}", channel.id, user.id, guild_id);

    let controls = embed::base(
        format!("Ticket: {}", user.display_name()),
        "Describe your problem. The staff will answer soon.",
    )
    .colour(Colour::DARK_GREEN);

    let close = CreateButton::new(CLOSE_BUTTON)
        .label("Close ticket")
        .emoji('🔒')
        .style(ButtonStyle::Danger);

    channel
        .id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .content(format!("<@{}>", user.id))
                .embed(controls)
                .components(vec![CreateActionRow::Buttons(vec![close])]),
        )
        .await?;

    component
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .embed(embed::success(format!("Ticket created: <#{}>", channel.id)))
                .ephemeral(true),
        )
        .await?;

    Ok(())
}

/// Closes the ticket of the channel the close button lives in and deletes the channel.
pub async fn close_ticket(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let ticket = TicketService::new(db)
        .close(component.channel_id.get())
        .await?;

    component.defer(&ctx.http).await?;

    component
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().content(format!(
                "🔒 This ticket will be deleted in {} seconds...",
                DELETE_DELAY.as_secs()
            )),
        )
        .await?;

    tracing::info!(
        "Closed ticket {} of {} in channel {}",
        ticket.id,
        ticket.user_id,
        component.channel_id
    );

    tokio::time::sleep(DELETE_DELAY).await;

    component.channel_id.delete(&ctx.http).await?;

    Ok(())
}

fn component_guild(component: &ComponentInteraction) -> Result<GuildId, AppError> {
    component.guild_id.ok_or_else(|| {
        AppError::BadRequest("Tickets can only be opened in a server.".to_string())
    })
}

/// Closes the ticket bound to a channel deleted by hand.
pub async fn handle_channel_delete(db: &DatabaseConnection, channel: &GuildChannel) {
    match TicketService::new(db).channel_deleted(channel.id.get()).await {
        Ok(true) => tracing::info!(
            "Ticket channel {} was deleted in guild {}, ticket closed",
            channel.id,
            channel.guild_id
        ),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to close ticket of deleted channel {}: {:?}", channel.id, e),
    }
}
