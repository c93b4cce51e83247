//! Giveaway factory.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating giveaway rows.
///
/// # Example
///
/// ```rust,ignore
/// let expired = GiveawayFactory::new(&db)
///     .end_time(Utc::now() - Duration::minutes(1))
///     .build()
///     .await?;
/// ```
pub struct GiveawayFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    message_id: String,
    prize: String,
    winners_count: i32,
    end_time: DateTime<Utc>,
    active: bool,
}

impl<'a> GiveawayFactory<'a> {
    /// Defaults to an active single-winner giveaway ending in one hour.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_snowflake(),
            channel_id: next_snowflake(),
            message_id: next_snowflake(),
            prize: format!("Prize {}", next_id()),
            winners_count: 1,
            end_time: Utc::now() + Duration::hours(1),
            active: true,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn winners_count(mut self, winners_count: i32) -> Self {
        self.winners_count = winners_count;
        self
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::giveaway::Model, DbErr> {
        entity::giveaway::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            prize: ActiveValue::Set(self.prize),
            winners_count: ActiveValue::Set(self.winners_count),
            end_time: ActiveValue::Set(self.end_time),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active giveaway with the given end time.
pub async fn create_giveaway(
    db: &DatabaseConnection,
    end_time: DateTime<Utc>,
) -> Result<entity::giveaway::Model, DbErr> {
    GiveawayFactory::new(db).end_time(end_time).build().await
}
