//! Quick replies stored per guild.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateAutocompleteResponse,
    CreateCommand, CreateCommandOption, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseMessage, Permissions,
};

use crate::bot::command::guild_of;
use crate::bot::command::options::Options;
use crate::bot::command::respond::{reply, reply_embed, reply_private};
use crate::bot::embed;
use crate::error::AppError;
use crate::service::tag::TagService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("tag")
            .description("Show a tag")
            .add_option(name_option().set_autocomplete(true)),
        CreateCommand::new("tag_create")
            .description("Create a quick reply")
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .add_option(name_option())
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "content", "What the tag says")
                    .required(true),
            ),
        CreateCommand::new("tag_delete")
            .description("Delete a tag")
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .add_option(name_option().set_autocomplete(true)),
        CreateCommand::new("tag_list").description("List every tag of this server"),
    ]
}

fn name_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "name", "Tag name").required(true)
}

pub async fn tag(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let name = Options::of(command).required_string("name")?;

    let tag = TagService::new(db).use_tag(guild_id.get(), name).await?;

    reply(
        ctx,
        command,
        CreateInteractionResponseMessage::new().content(tag.content),
    )
    .await
}

pub async fn tag_create(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);

    let tag = TagService::new(db)
        .create(
            guild_id.get(),
            command.user.id.get(),
            options.required_string("name")?,
            options.required_string("content")?,
            Utc::now(),
        )
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!("Tag **{}** created.", tag.name)),
    )
    .await
}

pub async fn tag_delete(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let name = Options::of(command).required_string("name")?;

    TagService::new(db).delete(guild_id.get(), name).await?;

    reply_private(
        ctx,
        command,
        embed::success(format!("🗑️ Tag **{}** deleted.", name)),
    )
    .await
}

pub async fn tag_list(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let tags = TagService::new(db).list(guild_id.get()).await?;

    if tags.is_empty() {
        return reply_embed(
            ctx,
            command,
            embed::base("📚 Tags", "📭 No tags were created on this server."),
        )
        .await;
    }

    let names = tags
        .iter()
        .map(|tag| format!("`{}`", tag.name))
        .collect::<Vec<_>>()
        .join(", ");

    let embed = embed::base(format!("📚 Server tags ({})", tags.len()), names)
        .colour(Colour::BLUE)
        .footer(CreateEmbedFooter::new("Use /tag <name> to show one."));

    reply_embed(ctx, command, embed).await
}

/// Answers the autocomplete of the `name` option of `/tag` and `/tag_delete`.
pub async fn autocomplete(
    db: &DatabaseConnection,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = interaction.guild_id else {
        return Ok(());
    };

    let partial = interaction
        .data
        .autocomplete()
        .map(|option| option.value)
        .unwrap_or_default();

    let suggestions = TagService::new(db).suggest(guild_id.get(), partial).await?;

    let response = suggestions
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |response, name| {
            response.add_string_choice(name.clone(), name)
        });

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await?;

    Ok(())
}
