//! Reaction giveaways.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Colour, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage, Http,
    MessageId, Permissions, ReactionType, UserId,
};

use crate::bot::command::options::Options;
use crate::bot::command::respond::{defer, edit_embed, reply_embed};
use crate::bot::command::{guild_of, require_module};
use crate::bot::discord_error::is_unknown_resource;
use crate::bot::embed;
use crate::error::AppError;
use crate::model::giveaway::{CreateGiveawayParam, Giveaway};
use crate::model::guild_config::GuildModule;
use crate::service::giveaway::{draw_winners, GiveawayService, GIVEAWAY_EMOJI};
use crate::util::duration::parse_duration;
use crate::util::timestamp;

/// Discord returns at most this many reactors per request.
const REACTION_PAGE_SIZE: u8 = 100;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("giveaway_start")
            .description("Start a giveaway")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "prize", "What is given away")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "duration",
                    "How long it runs (e.g. 10m, 1h, 2d)",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "winners", "Number of winners")
                    .min_int_value(1)
                    .max_int_value(50),
            ),
        CreateCommand::new("giveaway_end")
            .description("End a giveaway now")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "message_id",
                    "ID of the giveaway message",
                )
                .required(true),
            ),
    ]
}

pub async fn giveaway_start(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    require_module(db, guild_id, GuildModule::Giveaways).await?;

    let options = Options::of(command);
    let prize = options.required_string("prize")?.trim();
    let duration = parse_duration(options.required_string("duration")?)?;
    let winners_count = i32::try_from(options.integer("winners").unwrap_or(1))
        .map_err(|_| AppError::BadRequest("Invalid number of winners.".to_string()))?;

    if prize.is_empty() {
        return Err(AppError::BadRequest("The giveaway needs a prize.".to_string()));
    }
    if winners_count < 1 {
        return Err(AppError::BadRequest(
            "A giveaway needs at least one winner.".to_string(),
        ));
    }

    let end_time = Utc::now() + duration;

    let announcement = embed::base(
        "🎉 GIVEAWAY STARTED! 🎉",
        format!(
            "**Prize:** {}\n\n⏰ **Ends:** {}\n🏆 **Winners:** {}\n\n**React with {} to join!**",
            prize,
            timestamp::relative(end_time),
            winners_count,
            GIVEAWAY_EMOJI
        ),
    )
    .colour(Colour::PURPLE);

    reply_embed(ctx, command, announcement).await?;

    let message = command.get_response(&ctx.http).await?;
    message
        .react(&ctx.http, ReactionType::Unicode(GIVEAWAY_EMOJI.to_string()))
        .await?;

    let giveaway = GiveawayService::new(db)
        .create(CreateGiveawayParam {
            guild_id: guild_id.get(),
            channel_id: command.channel_id.get(),
            message_id: message.id.get(),
            prize: prize.to_string(),
            winners_count,
            end_time,
        })
        .await?;

    tracing::info!(
        "Giveaway {} for '{}' started in guild {}",
        giveaway.id,
        giveaway.prize,
        guild_id
    );

    Ok(())
}

pub async fn giveaway_end(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let message_id = Options::of(command)
        .required_string("message_id")?
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::BadRequest("That is not a valid message ID.".to_string()))?;

    let giveaway = GiveawayService::new(db)
        .find_active(guild_id.get(), message_id)
        .await?;

    defer(ctx, command, true).await?;

    finish_giveaway(db, &ctx.http, &giveaway).await?;

    edit_embed(ctx, command, embed::success("Giveaway ended.")).await
}

/// Closes a giveaway and announces its winners.
///
/// A giveaway whose channel or message is gone (404) is closed without an announcement.
/// Any other fetch failure leaves it active and is returned. When another caller closed
/// it first nothing is announced.
pub async fn finish_giveaway(
    db: &DatabaseConnection,
    http: &Http,
    giveaway: &Giveaway,
) -> Result<(), AppError> {
    let service = GiveawayService::new(db);
    let channel_id = ChannelId::new(giveaway.channel_id);
    let message_id = MessageId::new(giveaway.message_id);

    let message = match channel_id.message(http, message_id).await {
        Ok(message) => message,
        Err(e) if is_unknown_resource(&e) => {
            tracing::info!(
                "Giveaway {} message is gone, closing it silently: {:?}",
                giveaway.id,
                e
            );
            service.finish(giveaway.id).await?;
            return Ok(());
        }
        // Left active so the next pass retries
        Err(e) => return Err(e.into()),
    };

    let participants = participants(http, channel_id, message_id).await?;

    if !service.finish(giveaway.id).await? {
        return Ok(());
    }

    if participants.is_empty() {
        channel_id
            .send_message(
                http,
                CreateMessage::new().content(format!(
                    "⚠️ **Giveaway ended:** {}\nNobody joined. 😢",
                    giveaway.prize
                )),
            )
            .await?;
    } else {
        let winners = draw_winners(
            &participants,
            giveaway.winners_count.max(1) as usize,
            &mut rand::rng(),
        );
        let mentions = winners
            .iter()
            .map(|id| format!("<@{}>", id))
            .collect::<Vec<_>>()
            .join(", ");

        let announcement = embed::base(
            "🎉 WE HAVE A WINNER!",
            format!("**Prize:** {}\n**Winner(s):** {}", giveaway.prize, mentions),
        )
        .colour(Colour::GOLD)
        .footer(CreateEmbedFooter::new("Congratulations! Open a ticket to claim it."));

        channel_id
            .send_message(
                http,
                CreateMessage::new()
                    .content(format!("🎉 Congratulations {}!", mentions))
                    .embed(announcement),
            )
            .await?;

        tracing::info!("Giveaway {} won by {}", giveaway.id, mentions);
    }

    let ended = message
        .embeds
        .first()
        .cloned()
        .map(CreateEmbed::from)
        .unwrap_or_else(|| embed::base("🎉 Giveaway", format!("**Prize:** {}", giveaway.prize)))
        .colour(Colour::DARK_GREY)
        .footer(CreateEmbedFooter::new("🔴 Giveaway ended"));

    if let Err(e) = channel_id
        .edit_message(http, message_id, EditMessage::new().embed(ended))
        .await
    {
        tracing::warn!("Failed to mark giveaway {} as ended: {:?}", giveaway.id, e);
    }

    Ok(())
}

/// Non-bot users who reacted with the giveaway emoji.
async fn participants(
    http: &Http,
    channel_id: ChannelId,
    message_id: MessageId,
) -> Result<Vec<u64>, AppError> {
    let reaction = ReactionType::Unicode(GIVEAWAY_EMOJI.to_string());
    let mut participants = Vec::new();
    let mut after: Option<UserId> = None;

    loop {
        let page = channel_id
            .reaction_users(
                http,
                message_id,
                reaction.clone(),
                Some(REACTION_PAGE_SIZE),
                after,
            )
            .await?;

        let page_len = page.len();
        after = page.last().map(|user| user.id);
        participants.extend(
            page.into_iter()
                .filter(|user| !user.bot)
                .map(|user| user.id.get()),
        );

        if page_len < REACTION_PAGE_SIZE as usize {
            break;
        }
    }

    Ok(participants)
}
