use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::{bot::command::giveaway::finish_giveaway, error::AppError, service::giveaway::GiveawayService};

/// Draws and announces every active giveaway whose end time has passed.
pub async fn process_due_giveaways(
    db: &DatabaseConnection,
    http: &Http,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let due = GiveawayService::new(db).due(now).await?;

    for giveaway in &due {
        tracing::info!(
            "Ending giveaway {} ({}) in guild {}",
            giveaway.id,
            giveaway.prize,
            giveaway.guild_id
        );

        if let Err(e) = finish_giveaway(db, http, giveaway).await {
            tracing::error!("Failed to end giveaway {}: {}", giveaway.id, e);
        }
    }

    Ok(())
}
