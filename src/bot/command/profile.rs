//! Levels: profiles, rankings and level rewards.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateMessage, GuildId, Http, Permissions, RoleId, UserId,
};

use crate::bot::command::options::Options;
use crate::bot::command::respond::{reply_embed, reply_private};
use crate::bot::command::{guild_of, require_module};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::guild_config::GuildModule;
use crate::model::user::{UserProfile, XpGain};
use crate::service::level_reward::LevelRewardService;
use crate::service::user::{UserService, MAX_BIO_LENGTH};

const LEVEL_BAR_WIDTH: u32 = 10;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("profile")
            .description("Show your level, XP and coins")
            .add_option(CreateCommandOption::new(
                CommandOptionType::User,
                "member",
                "Member to look at",
            )),
        CreateCommand::new("bio")
            .description("Set the sentence shown on your profile")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "text",
                    "Your bio, leave blank to clear it",
                )
                .required(true)
                .max_length(MAX_BIO_LENGTH as u16),
            ),
        CreateCommand::new("ranking").description("Top members by level"),
        CreateCommand::new("richest").description("Top members by coins"),
        CreateCommand::new("levelreward")
            .description("Manage the roles granted on level up")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    "set",
                    "Grant a role when members reach a level",
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Integer, "level", "Level")
                        .required(true)
                        .min_int_value(2),
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Role, "role", "Role to grant")
                        .required(true),
                ),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "list",
                "List the configured rewards",
            ))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    "remove",
                    "Remove the reward of a level",
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Integer, "level", "Level")
                        .required(true),
                ),
            ),
    ]
}

/// Ten-block progress bar for a percentage.
pub fn level_bar(percent: u32) -> String {
    let filled = (percent.min(100) * LEVEL_BAR_WIDTH / 100) as usize;
    let empty = LEVEL_BAR_WIDTH as usize - filled;

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Rank label: a medal for the podium, the position otherwise.
pub fn rank_label(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("**#{}**", n + 1),
    }
}

pub async fn profile(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = Options::of(command);
    let target = options.user("member").unwrap_or(&command.user);

    let profile = UserService::new(db).profile(target.id.get()).await?;
    let percent = profile.progress_percent();

    let mut embed = embed::titled(format!("🛡️ {}'s profile", target.display_name()))
        .colour(embed::INFO)
        .thumbnail(target.face())
        .field("Level", format!("`{}`", profile.level), true)
        .field(
            "XP",
            format!("`{} / {}`", profile.xp, profile.next_level_xp()),
            true,
        )
        .field("DreamCoins", format!("DC$ {}", profile.coins), true)
        .field(
            "Progress",
            format!("[{}] {}%", level_bar(percent), percent),
            false,
        );

    if let Some(bio) = &profile.bio {
        embed = embed.field("📜 Bio", format!("*{}*", bio), false);
    }

    reply_embed(ctx, command, embed).await
}

pub async fn bio(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let text = Options::of(command).required_string("text")?;

    let profile = UserService::new(db).set_bio(command.user.id.get(), text).await?;

    let message = match &profile.bio {
        Some(bio) => format!("**New bio:**\n> *{}*", bio),
        None => "Your bio was cleared.".to_string(),
    };

    reply_private(ctx, command, embed::success(message)).await
}

pub async fn ranking(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let top = UserService::new(db).ranking().await?;

    let lines = leaderboard(&top, |profile| {
        format!("Level {} ({} XP)", profile.level, profile.xp)
    });

    let embed = embed::base("🏆 Ranking", lines)
        .colour(serenity::all::Colour::GOLD);

    reply_embed(ctx, command, embed).await
}

pub async fn richest(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let top = UserService::new(db).richest().await?;

    let lines = leaderboard(&top, |profile| format!("DC$ {}", profile.coins));

    let embed = embed::base("💰 Richest members", lines)
        .colour(serenity::all::Colour::GOLD);

    reply_embed(ctx, command, embed).await
}

fn leaderboard(profiles: &[UserProfile], score: impl Fn(&UserProfile) -> String) -> String {
    if profiles.is_empty() {
        return "There is not enough data for a ranking yet.".to_string();
    }

    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| {
            format!(
                "{} <@{}> • {}",
                rank_label(index),
                profile.discord_id,
                score(profile)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn level_reward(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);
    let Some((subcommand, options)) = options.subcommand() else {
        return Err(AppError::BadRequest("Missing subcommand.".to_string()));
    };

    let service = LevelRewardService::new(db);

    match subcommand {
        "set" => {
            let level = to_level(options.required_integer("level")?)?;
            let role = options.required_role("role")?;

            service.set(guild_id.get(), level, role.id.get()).await?;

            reply_private(
                ctx,
                command,
                embed::success(format!(
                    "Members reaching **level {}** will get <@&{}>.",
                    level, role.id
                )),
            )
            .await
        }
        "list" => {
            let rewards = service.list(guild_id.get()).await?;

            let description = if rewards.is_empty() {
                "No level rewards are configured.".to_string()
            } else {
                rewards
                    .iter()
                    .map(|reward| format!("🏆 **Level {}:** <@&{}>", reward.level_required, reward.role_id))
                    .collect::<Vec<_>>()
                    .join("\n")
            };

            reply_embed(
                ctx,
                command,
                embed::base("🎖️ Level rewards", description).colour(serenity::all::Colour::GOLD),
            )
            .await
        }
        "remove" => {
            let level = to_level(options.required_integer("level")?)?;

            service.remove(guild_id.get(), level).await?;

            reply_private(
                ctx,
                command,
                embed::success(format!("Removed the reward of level {}.", level)),
            )
            .await
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown subcommand `{}`.",
            other
        ))),
    }
}

fn to_level(value: i64) -> Result<i32, AppError> {
    i32::try_from(value).map_err(|_| AppError::BadRequest("Invalid level.".to_string()))
}

/// Adds the level up notice to a reward embed when the gain crossed a level.
pub fn with_level_up(embed: CreateEmbed, gain: &XpGain) -> CreateEmbed {
    if !gain.leveled_up() {
        return embed;
    }

    embed.field(
        "🆙 Level up!",
        format!("You are now level **{}**.", gain.profile.level),
        false,
    )
}

/// Grants the roles unlocked by a level up and lists them in a DM.
///
/// Does nothing when the levels module is off. Role and DM failures are logged and
/// otherwise ignored.
pub async fn grant_level_rewards(
    db: &DatabaseConnection,
    http: &Http,
    guild_id: GuildId,
    user_id: UserId,
    gain: &XpGain,
) {
    if !gain.leveled_up() {
        return;
    }

    if let Err(e) = require_module(db, guild_id, GuildModule::Levels).await {
        tracing::debug!("Skipping level rewards in guild {}: {}", guild_id, e);
        return;
    }

    let rewards = match LevelRewardService::new(db)
        .unlocked_by(guild_id.get(), gain)
        .await
    {
        Ok(rewards) => rewards,
        Err(e) => {
            tracing::error!("Failed to load level rewards: {:?}", e);
            return;
        }
    };

    if rewards.is_empty() {
        return;
    }

    let owned = match http.get_member(guild_id, user_id).await {
        Ok(member) => member.roles,
        Err(e) => {
            tracing::warn!("Failed to fetch member {} in guild {}: {:?}", user_id, guild_id, e);
            return;
        }
    };

    let reason = format!("Level up: {}", gain.profile.level);
    let mut granted = Vec::new();

    for reward in rewards {
        let role_id = RoleId::new(reward.role_id);
        if owned.contains(&role_id) {
            continue;
        }

        match http
            .add_member_role(guild_id, user_id, role_id, Some(&reason))
            .await
        {
            Ok(()) => granted.push(format!("<@&{}>", reward.role_id)),
            Err(e) => tracing::warn!("Failed to grant level reward {}: {:?}", role_id, e),
        }
    }

    if granted.is_empty() {
        return;
    }

    let dm = embed::base(
        "🎉 Rewards unlocked!",
        format!(
            "You reached **level {}** and earned:\n{}",
            gain.profile.level,
            granted.join(", ")
        ),
    )
    .colour(serenity::all::Colour::GOLD);

    if let Err(e) = user_id
        .direct_message(http, CreateMessage::new().embed(dm))
        .await
    {
        tracing::debug!("Could not DM level rewards to {}: {:?}", user_id, e);
    }
}
