//! Tribes.

use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::command::options::Options;
use crate::bot::command::respond::reply_embed;
use crate::bot::embed;
use crate::error::AppError;
use crate::model::tribe::TRIBE_COST;
use crate::service::tribe::{TribeService, MAX_MOTTO_LENGTH, MAX_NAME_LENGTH};

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("tribe_create")
            .description(format!("Found a new tribe (costs {} XP)", TRIBE_COST))
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Tribe name")
                    .required(true)
                    .max_length(MAX_NAME_LENGTH as u16),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "motto", "Short motto")
                    .max_length(MAX_MOTTO_LENGTH as u16),
            ),
        CreateCommand::new("tribe")
            .description("Show your tribe or another member's")
            .add_option(CreateCommandOption::new(
                CommandOptionType::User,
                "member",
                "Member to look at",
            )),
        CreateCommand::new("tribe_invite")
            .description("Bring a member into your tribe")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "member", "Member to invite")
                    .required(true),
            ),
        CreateCommand::new("tribe_leave").description("Leave your tribe"),
    ]
}

pub async fn tribe_create(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = Options::of(command);
    let name = options.required_string("name")?;

    let tribe = TribeService::new(db)
        .create(command.user.id.get(), name, options.string("motto"))
        .await?;

    tracing::info!("{} founded tribe '{}'", command.user.id, tribe.name);

    reply_embed(
        ctx,
        command,
        embed::base(
            "🏰 Tribe founded!",
            format!(
                "Congratulations, leader! The tribe **{}** is born.\nMotto: *{}*\n\n-{} XP",
                tribe.name, tribe.description, TRIBE_COST
            ),
        )
        .colour(Colour::DARK_RED),
    )
    .await
}

pub async fn tribe(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let target = Options::of(command).user("member");
    let user = target.unwrap_or(&command.user);

    let Some(card) = TribeService::new(db).card_of(user.id.get()).await? else {
        let text = match target {
            Some(user) => format!("{} is a lone wolf (no tribe).", user.display_name()),
            None => "You have no tribe. Use `/tribe_create` or ask for an invite.".to_string(),
        };
        return reply_embed(ctx, command, embed::base("🐺 No tribe", text)).await;
    };

    let tribe_embed = embed::base(
        format!("🛡️ Tribe: {}", card.tribe.name),
        format!("*{}*", card.tribe.description),
    )
    .colour(Colour::DARK_RED)
    .field("Leader", format!("<@{}>", card.tribe.leader_id), true)
    .field("Members", card.member_count.to_string(), true)
    .field(
        "Founded",
        card.tribe.created_at.format("%d/%m/%Y").to_string(),
        false,
    );

    reply_embed(ctx, command, tribe_embed).await
}

pub async fn tribe_invite(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let target = Options::of(command).required_user("member")?;

    let tribe = TribeService::new(db)
        .invite(command.user.id.get(), target.id.get(), target.bot)
        .await?;

    reply_embed(
        ctx,
        command,
        embed::success(format!(
            "🤝 **Welcome!** <@{}> is now part of the tribe **{}**.",
            target.id, tribe.name
        )),
    )
    .await
}

pub async fn tribe_leave(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let tribe = TribeService::new(db).leave(command.user.id.get()).await?;

    reply_embed(
        ctx,
        command,
        embed::base("👋 Tribe left", format!("You left the tribe **{}**.", tribe.name)),
    )
    .await
}
