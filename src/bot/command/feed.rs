//! News feed subscriptions.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, Permissions,
};

use crate::bot::command::guild_of;
use crate::bot::command::options::Options;
use crate::bot::command::respond::{defer, edit_embed};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::feed::{CreateFeedParam, FeedKind};
use crate::service::feed::FeedService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("feed_add")
            .description("Announce a YouTube channel or RSS feed")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Feed name")
                    .required(true)
                    .max_length(100),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "url", "Feed or channel link")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Channel, "channel", "Where to post")
                    .required(true)
                    .channel_types(vec![ChannelType::Text, ChannelType::News]),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "kind", "Feed type")
                    .required(true)
                    .add_string_choice("YouTube", FeedKind::Youtube.as_str())
                    .add_string_choice("RSS site or blog", FeedKind::Rss.as_str()),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::Role,
                "role",
                "Role mentioned with each post",
            )),
        CreateCommand::new("feed_list")
            .description("List the feeds of this server")
            .default_member_permissions(Permissions::ADMINISTRATOR),
        CreateCommand::new("feed_remove")
            .description("Stop announcing a feed")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "id", "Feed id")
                    .required(true)
                    .min_int_value(1),
            ),
    ]
}

pub async fn feed_add(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);
    let name = options.required_string("name")?;
    let url = options.required_string("url")?;
    let channel = options.required_channel("channel")?;
    let kind = FeedKind::from_db(options.required_string("kind")?)
        .ok_or_else(|| AppError::BadRequest("Unknown feed type.".to_string()))?;
    let role_id = options.role("role").map(|role| role.id.get());

    defer(ctx, command, true).await?;

    let feed = FeedService::new(db)
        .add(
            CreateFeedParam {
                guild_id: guild_id.get(),
                channel_id: channel.id.get(),
                role_id,
                name: name.to_string(),
                url: url.to_string(),
                kind,
            },
            Utc::now(),
        )
        .await?;

    tracing::info!("Feed {} added in guild {}: {}", feed.id, guild_id, feed.url);

    edit_embed(
        ctx,
        command,
        embed::success(format!(
            "Feed **{}** (#{}) will be announced in <#{}>.",
            feed.name, feed.id, feed.channel_id
        )),
    )
    .await
}

pub async fn feed_list(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    defer(ctx, command, true).await?;

    let feeds = FeedService::new(db).for_guild(guild_id.get()).await?;
    if feeds.is_empty() {
        return edit_embed(ctx, command, embed::base("📡 News feeds", "📭 No feeds configured."))
            .await;
    }

    let mut list = embed::titled("📡 News feeds").colour(embed::INFO);
    for feed in feeds {
        list = list.field(
            format!("#{} - {} ({})", feed.id, feed.name, feed.kind.as_str().to_uppercase()),
            format!(
                "Channel: <#{}>\nLast: {}",
                feed.channel_id,
                feed.last_post_url.as_deref().unwrap_or("None")
            ),
            false,
        );
    }

    edit_embed(ctx, command, list).await
}

pub async fn feed_remove(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let id = i32::try_from(Options::of(command).required_integer("id")?)
        .map_err(|_| AppError::NotFound("Feed not found.".to_string()))?;

    defer(ctx, command, true).await?;

    FeedService::new(db).remove(guild_id.get(), id).await?;

    edit_embed(ctx, command, embed::success(format!("🗑️ Feed #{} removed.", id))).await
}
