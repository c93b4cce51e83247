use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{colours, ChannelId, CreateEmbed, CreateMessage, GuildId, Http, UserId};

use crate::{
    bot::command::{birthday::members_of, profile::grant_level_rewards},
    error::AppError,
    model::birthday::Birthday,
    service::{
        birthday::{BirthdayService, BIRTHDAY_XP},
        guild_config::GuildConfigService,
        user::UserService,
    },
};

/// Congratulates today's birthdays in the welcome channel of every guild they belong to.
///
/// Each celebrated user gets the XP bonus once, however many guilds they share with the
/// bot. Every birthday of the day is marked celebrated for the current year afterwards.
pub async fn celebrate_birthdays(
    db: &DatabaseConnection,
    http: &Http,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let birthdays = BirthdayService::new(db).to_celebrate(now).await?;
    if birthdays.is_empty() {
        return Ok(());
    }

    tracing::info!("Celebrating {} birthday(s)", birthdays.len());

    let configs = GuildConfigService::new(db).with_welcome_channel().await?;
    let mut rewarded = HashSet::new();

    for config in configs {
        let Some(channel_id) = config.welcome_channel_id else {
            continue;
        };
        let guild_id = GuildId::new(config.guild_id);

        let present = members_of(http, guild_id, birthdays.clone()).await;
        if present.is_empty() {
            continue;
        }

        let user_ids: Vec<u64> = present.iter().map(|birthday| birthday.user_id).collect();
        let message = birthday_message(&user_ids);

        if let Err(e) = ChannelId::new(channel_id).send_message(http, message).await {
            tracing::warn!(
                "Failed to post birthdays in guild {}: {}",
                config.guild_id,
                e
            );
        }

        for user_id in user_ids {
            if rewarded.insert(user_id) {
                reward(db, http, guild_id, user_id).await;
            }
        }
    }

    mark_celebrated(db, &birthdays, now.year()).await;

    Ok(())
}

async fn reward(db: &DatabaseConnection, http: &Http, guild_id: GuildId, user_id: u64) {
    match UserService::new(db).add_xp(user_id, BIRTHDAY_XP).await {
        Ok(gain) => grant_level_rewards(db, http, guild_id, UserId::new(user_id), &gain).await,
        Err(e) => tracing::error!("Failed to give birthday XP to user {}: {}", user_id, e),
    }
}

async fn mark_celebrated(db: &DatabaseConnection, birthdays: &[Birthday], year: i32) {
    let service = BirthdayService::new(db);

    for birthday in birthdays {
        if let Err(e) = service.mark_celebrated(birthday.id, year).await {
            tracing::error!(
                "Failed to mark birthday {} of user {} as celebrated: {}",
                birthday.id,
                birthday.user_id,
                e
            );
        }
    }
}

fn mention_list(user_ids: &[u64]) -> String {
    user_ids
        .iter()
        .map(|id| format!("<@{}>", id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn birthday_message(user_ids: &[u64]) -> CreateMessage {
    let mentions = mention_list(user_ids);

    let embed = CreateEmbed::new()
        .title("🎉 Happy birthday! 🎂")
        .description(format!(
            "Today is a special day at Dream Club!\n\nCongratulations {} on another year \
             of life and growth.\n🎁 **Gift:** **{} XP** bonus!",
            mentions, BIRTHDAY_XP
        ))
        .colour(colours::branding::FUCHSIA);

    CreateMessage::new()
        .content(format!("Happy birthday {}! 🥳", mentions))
        .embed(embed)
}
