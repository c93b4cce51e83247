use std::future::Future;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::ticket::TicketRepository,
    error::AppError,
    model::ticket::{Ticket, TicketStatus},
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Refuses a second ticket while the member's open ticket channel still exists.
    ///
    /// An open ticket whose channel is gone is closed here so the member is not locked
    /// out of support.
    ///
    /// # Arguments
    /// - `channel_exists` - Looks up a ticket channel on Discord
    ///
    /// # Returns
    /// - `Ok(())` - The member may open a ticket
    /// - `Err(AppError::BadRequest)` - The member's open ticket channel still exists
    pub async fn ensure_can_open<F, Fut>(
        &self,
        guild_id: u64,
        user_id: u64,
        channel_exists: F,
    ) -> Result<(), AppError>
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = Result<bool, AppError>>,
    {
        let repo = TicketRepository::new(self.db);
        let Some(ticket) = repo.find_open_for_user(guild_id, user_id).await? else {
            return Ok(());
        };

        if channel_exists(ticket.channel_id).await? {
            return Err(AppError::BadRequest(format!(
                "You already have an open ticket: <#{}>",
                ticket.channel_id
            )));
        }

        tracing::info!(
            "Closing stale ticket {} of {}: channel {} no longer exists",
            ticket.id,
            user_id,
            ticket.channel_id
        );
        repo.close(ticket.channel_id).await?;

        Ok(())
    }

    /// Records a ticket for a freshly created channel.
    pub async fn open(
        &self,
        guild_id: u64,
        channel_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Ticket, AppError> {
        TicketRepository::new(self.db)
            .create(guild_id, channel_id, user_id, now)
            .await
    }

    /// Closes the ticket bound to `channel_id`.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The ticket that is now closed
    /// - `Err(AppError::NotFound)` - The channel is not an open ticket
    pub async fn close(&self, channel_id: u64) -> Result<Ticket, AppError> {
        let repo = TicketRepository::new(self.db);

        let ticket = repo
            .find_by_channel(channel_id)
            .await?
            .filter(|ticket| ticket.status == TicketStatus::Open)
            .ok_or_else(not_a_ticket)?;

        if !repo.close(channel_id).await? {
            return Err(not_a_ticket());
        }

        Ok(ticket)
    }

    /// Closes the ticket of a channel that was deleted on Discord.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was an open ticket
    /// - `Ok(false)` - Not a ticket channel, or already closed
    pub async fn channel_deleted(&self, channel_id: u64) -> Result<bool, AppError> {
        TicketRepository::new(self.db).close(channel_id).await
    }
}

fn not_a_ticket() -> AppError {
    AppError::NotFound("This channel is not an open ticket.".to_string())
}
