//! Moderation: log channel, timeouts and kicks.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateMessage, EditMember, Guild, GuildId, Permissions, RoleId, User,
};

use crate::bot::command::options::Options;
use crate::bot::command::respond::{reply_embed, reply_private};
use crate::bot::command::guild_of;
use crate::bot::embed;
use crate::error::AppError;
use crate::model::guild_config::GuildSetting;
use crate::service::guild_config::GuildConfigService;
use crate::util::timestamp;

const TIMEOUT_LENGTH: Duration = Duration::minutes(10);
const DEFAULT_TIMEOUT_REASON: &str = "Immature behaviour";
const DEFAULT_KICK_REASON: &str = "Not following the server rules";
/// Discord's audit log reason limit.
const MAX_REASON_LENGTH: usize = 512;

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("config_logs")
            .description("Set the channel that receives the server log")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::Channel, "channel", "Log channel")
                    .required(true)
                    .channel_types(vec![ChannelType::Text]),
            ),
        CreateCommand::new("ego_check")
            .description("Time a member out for 10 minutes")
            .default_member_permissions(Permissions::MODERATE_MEMBERS)
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "member", "Member to time out")
                    .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "reason",
                "Why the member is timed out",
            )),
        CreateCommand::new("reality")
            .description("Kick a member from the server")
            .default_member_permissions(Permissions::KICK_MEMBERS)
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "member", "Member to kick")
                    .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "reason",
                "Why the member is kicked",
            )),
    ]
}

pub async fn config_logs(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let channel = Options::of(command).required_channel("channel")?;

    GuildConfigService::new(db)
        .set(guild_id.get(), GuildSetting::LogChannel, Some(channel.id.get()))
        .await?;

    reply_private(
        ctx,
        command,
        embed::success(format!("Server events will be logged in <#{}>.", channel.id)),
    )
    .await
}

pub async fn ego_check(
    _db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);
    let target = options.required_user("member")?;
    let reason = reason_or(options.string("reason"), DEFAULT_TIMEOUT_REASON);

    check_target(ctx, command, guild_id, target).await?;

    let until = timestamp::to_discord(Utc::now() + TIMEOUT_LENGTH)?;
    guild_id
        .edit_member(
            &ctx.http,
            target.id,
            EditMember::new()
                .disable_communication_until_datetime(until)
                .audit_log_reason(&reason),
        )
        .await?;

    tracing::info!(
        "{} timed out {} in guild {}: {}",
        command.user.id,
        target.id,
        guild_id,
        reason
    );

    let notice = embed::warning(format!(
        "You were timed out for 10 minutes.\n**Reason:** {}",
        reason
    ));
    let delivered = target
        .direct_message(&ctx.http, CreateMessage::new().embed(notice))
        .await
        .is_ok();

    let mut description = format!(
        "<@{}> was timed out for 10 minutes.\n**Reason:** {}",
        target.id, reason
    );
    if !delivered {
        description.push_str("\n*(Could not send them a DM.)*");
    }

    reply_embed(ctx, command, embed::base("🧘 Ego check", description).colour(embed::WARNING))
        .await
}

pub async fn reality(
    _db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = guild_of(command)?;
    let options = Options::of(command);
    let target = options.required_user("member")?;
    let reason = reason_or(options.string("reason"), DEFAULT_KICK_REASON);

    check_target(ctx, command, guild_id, target).await?;

    // Sent first, a kicked member shares no server with the bot anymore
    let notice = embed::error(format!("You were kicked from the server.\n**Reason:** {}", reason));
    let delivered = target
        .direct_message(&ctx.http, CreateMessage::new().embed(notice))
        .await
        .is_ok();

    guild_id
        .kick_with_reason(&ctx.http, target.id, &reason)
        .await?;

    tracing::info!(
        "{} kicked {} from guild {}: {}",
        command.user.id,
        target.id,
        guild_id,
        reason
    );

    let mut description = format!("<@{}> was kicked.\n**Reason:** {}", target.id, reason);
    if !delivered {
        description.push_str("\n*(Could not send them a DM.)*");
    }

    reply_embed(ctx, command, embed::base("🚪 Reality check", description).colour(embed::ERROR))
        .await
}

/// Refuses to act on the caller, the bot, the owner or anyone the bot's roles cannot reach.
async fn check_target(
    ctx: &Context,
    command: &CommandInteraction,
    guild_id: GuildId,
    target: &User,
) -> Result<(), AppError> {
    let bot_id = ctx.cache.current_user().id;

    if target.id == command.user.id {
        return Err(AppError::BadRequest("You cannot do that to yourself.".to_string()));
    }
    if target.id == bot_id {
        return Err(AppError::BadRequest("Nice try.".to_string()));
    }

    let target_member = guild_id.member(ctx, target.id).await?;
    let bot_member = guild_id.member(ctx, bot_id).await?;

    let (owner_id, bot_top, target_top) = {
        let guild = ctx.cache.guild(guild_id).ok_or_else(|| {
            AppError::InternalError(format!("Guild {} is not cached", guild_id))
        })?;
        (
            guild.owner_id,
            top_position(&guild, &bot_member.roles),
            top_position(&guild, &target_member.roles),
        )
    };

    if target.id == owner_id || !can_moderate(bot_top, target_top) {
        return Err(AppError::BadRequest(format!(
            "My roles are not high enough to moderate <@{}>.",
            target.id
        )));
    }

    Ok(())
}

fn top_position(guild: &Guild, roles: &[RoleId]) -> Option<u16> {
    roles
        .iter()
        .filter_map(|id| guild.roles.get(id))
        .map(|role| role.position)
        .max()
}

/// The bot can only act on members whose highest role sits below its own.
pub fn can_moderate(bot_top: Option<u16>, target_top: Option<u16>) -> bool {
    match (bot_top, target_top) {
        (Some(bot), Some(target)) => bot > target,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn reason_or(reason: Option<&str>, default: &str) -> String {
    let reason = reason.map(str::trim).filter(|r| !r.is_empty()).unwrap_or(default);
    reason.chars().take(MAX_REASON_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_needs_a_higher_role() {
        assert!(can_moderate(Some(5), Some(3)));
        assert!(can_moderate(Some(1), None));
        assert!(!can_moderate(Some(3), Some(3)));
        assert!(!can_moderate(Some(2), Some(7)));
        assert!(!can_moderate(None, None));
    }

    #[test]
    fn falls_back_to_default_reason() {
        assert_eq!(reason_or(None, DEFAULT_KICK_REASON), DEFAULT_KICK_REASON);
        assert_eq!(reason_or(Some("   "), DEFAULT_TIMEOUT_REASON), DEFAULT_TIMEOUT_REASON);
        assert_eq!(reason_or(Some(" spam "), DEFAULT_TIMEOUT_REASON), "spam");
        assert_eq!(
            reason_or(Some(&"a".repeat(600)), DEFAULT_KICK_REASON).len(),
            MAX_REASON_LENGTH
        );
    }
}
