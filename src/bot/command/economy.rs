//! DreamCoins: balances, transfers, bets and the daily reward.

use chrono::Utc;
use rand::Rng;
use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::bot::command::options::Options;
use crate::bot::command::profile::{grant_level_rewards, with_level_up};
use crate::bot::command::respond::{reply_embed, reply_private};
use crate::bot::command::{guild_of, require_module};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::guild_config::{GuildModule, GuildSetting};
use crate::model::user::DailyClaim;
use crate::service::guild_config::GuildConfigService;
use crate::service::user::{UserService, DAILY_COINS, DAILY_XP, MIN_BET};
use crate::util::quote::random_quote;
use crate::util::timestamp;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("balance")
            .description("Show how many DreamCoins a member has")
            .add_option(CreateCommandOption::new(
                CommandOptionType::User,
                "member",
                "Member to look at",
            )),
        CreateCommand::new("pay")
            .description("Send DreamCoins to another member")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "member", "Who receives")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "amount", "Amount of DC$")
                    .required(true),
            ),
        CreateCommand::new("coinflip")
            .description("Bet DreamCoins on a coin flip, double or nothing")
            .add_option(bet_option())
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "side", "Your call")
                    .required(true)
                    .add_string_choice("Heads", "heads")
                    .add_string_choice("Tails", "tails"),
            ),
        CreateCommand::new("dice")
            .description("Roll a die: 4 to 6 pays half your bet, 1 to 3 loses it")
            .add_option(bet_option()),
        CreateCommand::new("daily").description("Claim your daily XP and DreamCoins"),
        CreateCommand::new("advice").description("Receive a piece of wisdom"),
        CreateCommand::new("setup_daily")
            .description("Post the daily reflection in this channel at 09:00 UTC")
            .default_member_permissions(Permissions::ADMINISTRATOR),
    ]
}

fn bet_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, "amount", "Amount of DC$ to bet")
        .required(true)
        .min_int_value(MIN_BET as u64)
}

pub async fn balance(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    require_module(db, guild_id, GuildModule::Economy).await?;

    let options = Options::of(command);
    let target = options.user("member").unwrap_or(&command.user);

    let profile = UserService::new(db).profile(target.id.get()).await?;

    let embed = embed::base(
        format!("💰 {}'s wallet", target.display_name()),
        format!("DC$ {}", profile.coins),
    );

    reply_embed(ctx, command, embed).await
}

pub async fn pay(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    require_module(db, guild_id, GuildModule::Economy).await?;

    let options = Options::of(command);
    let receiver = options.required_user("member")?;
    let amount = options.required_integer("amount")?;

    if receiver.bot {
        return Err(AppError::BadRequest("Bots do not need DreamCoins.".to_string()));
    }

    let transfer = UserService::new(db)
        .pay(command.user.id.get(), receiver.id.get(), amount)
        .await?;

    tracing::info!(
        "{} paid {} coins to {}",
        command.user.id,
        transfer.amount,
        receiver.id
    );

    let embed = embed::base(
        "💸 Transfer complete",
        format!(
            "<@{}> sent **DC$ {}** to <@{}>.",
            command.user.id, transfer.amount, receiver.id
        ),
    )
    .colour(embed::SUCCESS);

    reply_embed(ctx, command, embed).await
}

pub async fn coinflip(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    require_module(db, guild_id, GuildModule::Economy).await?;

    let options = Options::of(command);
    let amount = options.required_integer("amount")?;
    let call = options.required_string("side")?;

    let landed = if rand::rng().random_bool(0.5) {
        "heads"
    } else {
        "tails"
    };
    let won = landed == call;

    let outcome = UserService::new(db)
        .coinflip(command.user.id.get(), amount, won)
        .await?;

    let (description, colour) = if outcome.won() {
        (
            format!(
                "🎉 **You won!** It landed on **{}**.\nYou earned **DC$ {}**.",
                landed, outcome.delta
            ),
            Colour::DARK_GREEN,
        )
    } else {
        (
            format!(
                "📉 **You lost...** It landed on **{}**.\nYou lost **DC$ {}**.",
                landed, -outcome.delta
            ),
            Colour::RED,
        )
    };

    let embed = embed::base("🪙 Coin flip", description)
        .colour(colour)
        .field("Balance", format!("DC$ {}", outcome.balance), true);

    reply_embed(ctx, command, embed).await
}

pub async fn dice(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    require_module(db, guild_id, GuildModule::Economy).await?;

    let amount = Options::of(command).required_integer("amount")?;
    let roll: u8 = rand::rng().random_range(1..=6);

    let outcome = UserService::new(db)
        .dice(command.user.id.get(), amount, roll)
        .await?;

    let (description, colour) = if outcome.won() {
        (
            format!(
                "🎲 The die shows **{}**!\n**You won** a profit of **DC$ {}**.",
                roll, outcome.delta
            ),
            Colour::DARK_GREEN,
        )
    } else {
        (
            format!(
                "🎲 The die shows **{}**...\n**You lost** DC$ {}.",
                roll, -outcome.delta
            ),
            Colour::RED,
        )
    };

    let embed = embed::base("🎲 Dice", description)
        .colour(colour)
        .field("Balance", format!("DC$ {}", outcome.balance), true);

    reply_embed(ctx, command, embed).await
}

pub async fn daily(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    require_module(db, guild_id, GuildModule::Economy).await?;

    let xp = rand::rng().random_range(DAILY_XP);
    let coins = rand::rng().random_range(DAILY_COINS);

    let claim = UserService::new(db)
        .daily(command.user.id.get(), Utc::now(), xp, coins)
        .await?;

    match claim {
        DailyClaim::CoolingDown { next_claim } => {
            let embed = embed::warning(format!(
                "⏳ You already claimed today. Come back {}.",
                timestamp::relative(next_claim)
            ));

            reply_private(ctx, command, embed).await
        }
        DailyClaim::Claimed { xp, coins, gain } => {
            let embed = with_level_up(
                embed::base(
                    "📅 Daily reward",
                    format!("You received **{} XP** and **DC$ {}**.", xp, coins),
                )
                .colour(embed::SUCCESS)
                .field("Level", gain.profile.level.to_string(), true)
                .field("Balance", format!("DC$ {}", gain.profile.coins), true),
                &gain,
            );

            reply_embed(ctx, command, embed).await?;

            grant_level_rewards(db, &ctx.http, guild_id, command.user.id, &gain).await;

            Ok(())
        }
    }
}

pub async fn advice(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let embed = embed::base("🧘 Wisdom", random_quote()).colour(Colour::LIGHT_GREY);

    reply_embed(ctx, command, embed).await
}

pub async fn setup_daily(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;

    GuildConfigService::new(db)
        .set(
            guild_id.get(),
            GuildSetting::DailyChannel,
            Some(command.channel_id.get()),
        )
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!(
            "Daily reflections will be posted in <#{}> at 09:00 UTC.",
            command.channel_id
        )),
    )
    .await
}
