//! Slash commands.
//!
//! Each feature module exposes `commands()` with its definitions and one function per
//! command. `definitions` picks the modules a profile registers and `dispatch` routes
//! an incoming command by name.

pub mod afk;
pub mod backup;
pub mod birthday;
pub mod challenge;
pub mod deals;
pub mod economy;
pub mod feed;
pub mod giveaway;
pub mod goal;
pub mod habit;
pub mod journal;
pub mod moderation;
pub mod music;
pub mod options;
pub mod poll;
pub mod profile;
pub mod reminder;
pub mod respond;
pub mod shop;
pub mod starboard;
pub mod stats;
pub mod tag;
pub mod ticket;
pub mod tribe;
pub mod welcome;

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand, GuildId};

use crate::bot::handler::Handler;
use crate::config::BotProfile;
use crate::error::AppError;
use crate::model::guild_config::GuildModule;
use crate::service::guild_config::GuildConfigService;

/// Slash commands registered by a profile.
///
/// Music bots only register the music commands.
pub fn definitions(profile: BotProfile) -> Vec<CreateCommand> {
    let mut commands = music::commands();

    if profile.is_main() {
        commands.extend(profile::commands());
        commands.extend(economy::commands());
        commands.extend(shop::commands());
        commands.extend(welcome::commands());
        commands.extend(giveaway::commands());
        commands.extend(reminder::commands());
        commands.extend(birthday::commands());
        commands.extend(afk::commands());
        commands.extend(tag::commands());
        commands.extend(ticket::commands());
        commands.extend(moderation::commands());
        commands.extend(poll::commands());
        commands.extend(starboard::commands());
        commands.extend(tribe::commands());
        commands.extend(stats::commands());
        commands.extend(backup::commands());
        commands.extend(feed::commands());
        commands.extend(deals::commands());
        commands.extend(goal::commands());
        commands.extend(habit::commands());
        commands.extend(journal::commands());
        commands.extend(challenge::commands());
    }

    commands
}

/// Routes a slash command to its implementation.
pub async fn dispatch(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let db = &handler.db;

    match command.data.name.as_str() {
        "play" => music::play(handler, ctx, command).await,
        "skip" => music::skip(handler, ctx, command).await,
        "stop" => music::stop(handler, ctx, command).await,
        "pause" => music::pause(handler, ctx, command).await,
        "resume" => music::resume(handler, ctx, command).await,
        "queue" => music::queue(handler, ctx, command).await,
        "loop" => music::set_loop(handler, ctx, command).await,
        "nowplaying" => music::now_playing(handler, ctx, command).await,
        _ if !handler.profile.is_main() => Err(unknown(command)),

        "profile" => profile::profile(db, ctx, command).await,
        "bio" => profile::bio(db, ctx, command).await,
        "ranking" => profile::ranking(db, ctx, command).await,
        "richest" => profile::richest(db, ctx, command).await,
        "levelreward" => profile::level_reward(db, ctx, command).await,

        "balance" => economy::balance(db, ctx, command).await,
        "pay" => economy::pay(db, ctx, command).await,
        "coinflip" => economy::coinflip(db, ctx, command).await,
        "dice" => economy::dice(db, ctx, command).await,
        "daily" => economy::daily(db, ctx, command).await,
        "advice" => economy::advice(ctx, command).await,
        "setup_daily" => economy::setup_daily(db, ctx, command).await,

        "shop" => shop::shop(db, ctx, command).await,
        "buy" => shop::buy(db, ctx, command).await,
        "shop_add" => shop::shop_add(db, ctx, command).await,

        "welcome_channel" => welcome::welcome_channel(db, ctx, command).await,
        "welcome_message" => welcome::welcome_message(db, ctx, command).await,
        "autorole" => welcome::autorole(db, ctx, command).await,

        "giveaway_start" => giveaway::giveaway_start(db, ctx, command).await,
        "giveaway_end" => giveaway::giveaway_end(db, ctx, command).await,

        "remind" => reminder::remind(db, ctx, command).await,

        "birthday" => birthday::birthday(db, ctx, command).await,
        "birthdays" => birthday::birthdays(db, ctx, command).await,

        "afk" => afk::afk(db, ctx, command).await,

        "tag" => tag::tag(db, ctx, command).await,
        "tag_create" => tag::tag_create(db, ctx, command).await,
        "tag_delete" => tag::tag_delete(db, ctx, command).await,
        "tag_list" => tag::tag_list(db, ctx, command).await,

        "setup_tickets" => ticket::setup_tickets(db, ctx, command).await,

        "config_logs" => moderation::config_logs(db, ctx, command).await,
        "ego_check" => moderation::ego_check(db, ctx, command).await,
        "reality" => moderation::reality(db, ctx, command).await,

        "poll" => poll::poll(db, ctx, command).await,
        "poll_close" => poll::poll_close(db, ctx, command).await,

        "config_starboard" => starboard::config_starboard(db, ctx, command).await,

        "tribe_create" => tribe::tribe_create(db, ctx, command).await,
        "tribe" => tribe::tribe(db, ctx, command).await,
        "tribe_invite" => tribe::tribe_invite(db, ctx, command).await,
        "tribe_leave" => tribe::tribe_leave(db, ctx, command).await,

        "setup_stats" => stats::setup_stats(db, ctx, command).await,

        "backup_create" => backup::backup_create(handler, ctx, command).await,
        "backup_download" => backup::backup_download(handler, ctx, command).await,

        "feed_add" => feed::feed_add(db, ctx, command).await,
        "feed_list" => feed::feed_list(db, ctx, command).await,
        "feed_remove" => feed::feed_remove(db, ctx, command).await,

        "config_deals" => deals::config_deals(handler, ctx, command).await,
        "deals_test" => deals::deals_test(handler, ctx, command).await,

        "goal_new" => goal::goal_new(db, ctx, command).await,
        "goals" => goal::goals(db, ctx, command).await,
        "goal_done" => goal::goal_done(db, ctx, command).await,

        "habit_new" => habit::habit_new(db, ctx, command).await,
        "habits" => habit::habits(db, ctx, command).await,
        "checkin" => habit::checkin(db, ctx, command).await,

        "journal_write" => journal::journal_write(db, ctx, command).await,
        "journal_read" => journal::journal_read(db, ctx, command).await,

        "challenge" => challenge::challenge(db, ctx, command).await,
        "challenge_done" => challenge::challenge_done(db, ctx, command).await,
        "challenge_new" => challenge::challenge_new(db, ctx, command).await,
        "challenge_end" => challenge::challenge_end(db, ctx, command).await,

        _ => Err(unknown(command)),
    }
}

fn unknown(command: &CommandInteraction) -> AppError {
    AppError::BadRequest(format!("Unknown command `/{}`.", command.data.name))
}

/// Guild the command was used in; commands are not available in DMs.
pub fn guild_of(command: &CommandInteraction) -> Result<GuildId, AppError> {
    command.guild_id.ok_or_else(|| {
        AppError::BadRequest("This command can only be used in a server.".to_string())
    })
}

/// Fails when `module` is switched off for the guild.
pub async fn require_module(
    db: &DatabaseConnection,
    guild_id: GuildId,
    module: GuildModule,
) -> Result<(), AppError> {
    let config = GuildConfigService::new(db).get_or_create(guild_id.get()).await?;

    if config.is_enabled(module) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "The {} module is disabled on this server.",
            module.name()
        )))
    }
}
