use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::ticket::{Ticket, TicketStatus},
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        guild_id: u64,
        channel_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Ticket, AppError> {
        let entity = entity::ticket::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ticket::from_entity(entity)
    }

    pub async fn find_by_channel(&self, channel_id: u64) -> Result<Option<Ticket>, AppError> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Open ticket of a member in a guild, if any.
    pub async fn find_open_for_user(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Ticket>, AppError> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::ticket::Column::UserId.eq(user_id.to_string()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Closes the ticket bound to a channel.
    ///
    /// # Returns
    /// - `Ok(true)` - The ticket was open and is now closed
    /// - `Ok(false)` - No open ticket for that channel
    pub async fn close(&self, channel_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::Ticket::update_many()
            .filter(entity::ticket::Column::ChannelId.eq(channel_id.to_string()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .col_expr(
                entity::ticket::Column::Status,
                sea_orm::sea_query::Expr::value(TicketStatus::Closed.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
