//! Ticket factory.

use crate::factory::helpers::next_snowflake;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an open ticket in `guild_id` backed by a generated channel.
pub async fn create_ticket(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::ticket::Model, DbErr> {
    entity::ticket::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(next_snowflake()),
        user_id: ActiveValue::Set(user_id.to_string()),
        status: ActiveValue::Set("open".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
