use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Colour, CreateEmbed, CreateEmbedFooter, CreateMessage, Http, UserId};

use crate::{
    error::AppError, model::reminder::Reminder, service::reminder::ReminderService,
    util::timestamp::to_discord,
};

/// Delivers every active reminder that is due.
///
/// A reminder is marked sent after one delivery attempt whether it succeeded or not.
pub async fn process_due_reminders(
    db: &DatabaseConnection,
    http: &Http,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let service = ReminderService::new(db);

    for reminder in service.due(now).await? {
        if let Err(e) = deliver(http, &reminder).await {
            tracing::warn!(
                "Could not deliver reminder {} to user {}: {}",
                reminder.id,
                reminder.user_id,
                e
            );
        }

        if let Err(e) = service.mark_sent(reminder.id).await {
            tracing::error!("Failed to mark reminder {} as sent: {}", reminder.id, e);
        }
    }

    Ok(())
}

/// Posts the reminder in its channel, falling back to a DM.
async fn deliver(http: &Http, reminder: &Reminder) -> Result<(), AppError> {
    let message = reminder_message(reminder)?;

    let channel_id = ChannelId::new(reminder.channel_id);
    match channel_id.send_message(http, message.clone()).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::debug!(
                "Reminder {} could not be posted in channel {}, trying a DM: {}",
                reminder.id,
                channel_id,
                e
            );

            let dm = UserId::new(reminder.user_id).create_dm_channel(http).await?;
            dm.send_message(http, message).await?;

            Ok(())
        }
    }
}

fn reminder_message(reminder: &Reminder) -> Result<CreateMessage, AppError> {
    let embed = CreateEmbed::new()
        .title("⏰ Reminder!")
        .description(format!("**You asked me to remind you:**\n\n📝 {}", reminder.message))
        .colour(Colour::TEAL)
        .timestamp(to_discord(reminder.created_at)?)
        .footer(CreateEmbedFooter::new("Set"));

    Ok(CreateMessage::new()
        .content(format!("<@{}>", reminder.user_id))
        .embed(embed))
}
