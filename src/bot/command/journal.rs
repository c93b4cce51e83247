//! Private journal.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbedFooter, CreateMessage,
};

use crate::bot::command::guild_of;
use crate::bot::command::options::Options;
use crate::bot::command::profile::{grant_level_rewards, with_level_up};
use crate::bot::command::respond::{defer, edit_embed};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::journal::{JOURNAL_XP, MAX_ENTRY_LENGTH};
use crate::service::journal::JournalService;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("journal_write")
            .description("Write a reflection in your private journal")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "text",
                    "Your thought, lesson or win of the day",
                )
                .required(true)
                .max_length(MAX_ENTRY_LENGTH as u16),
            ),
        CreateCommand::new("journal_read").description("Receive your last 5 entries by DM"),
    ]
}

pub async fn journal_write(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let text = Options::of(command).required_string("text")?;

    defer(ctx, command, true).await?;

    let (_, gain) = JournalService::new(db)
        .write(command.user.id.get(), text, Utc::now())
        .await?;

    let embed = with_level_up(
        embed::success(format!(
            "**Saved!** Your reflection is safely stored.\n🧠 You earned **{} XP** for exercising your mind.",
            JOURNAL_XP
        )),
        &gain,
    );
    edit_embed(ctx, command, embed).await?;

    grant_level_rewards(db, &ctx.http, guild_id, command.user.id, &gain).await;

    Ok(())
}

pub async fn journal_read(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    defer(ctx, command, true).await?;

    let entries = JournalService::new(db).latest(command.user.id.get()).await?;
    if entries.is_empty() {
        return edit_embed(
            ctx,
            command,
            embed::base(
                "📔 Journal",
                "📭 Your journal is empty. Use `/journal_write` to start.",
            ),
        )
        .await;
    }

    let mut pages = embed::base("📔 Your journal", "Your latest reflections:")
        .colour(Colour::DARK_GREY)
        .footer(CreateEmbedFooter::new("Only you can see this."));
    for entry in &entries {
        pages = pages.field(
            format!("📅 {}", entry.created_at.format("%d/%m %H:%M")),
            format!("_{}_", entry.preview()),
            false,
        );
    }

    if let Err(e) = command
        .user
        .direct_message(&ctx.http, CreateMessage::new().embed(pages))
        .await
    {
        tracing::debug!("Failed to DM journal to {}: {:?}", command.user.id, e);
        return Err(AppError::BadRequest(
            "I could not DM you. Please allow direct messages in your server settings."
                .to_string(),
        ));
    }

    edit_embed(ctx, command, embed::success("I sent your entries to your DMs.")).await
}
