//! Poll factory.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active two-answer poll in `guild_id`.
pub async fn create_poll(
    db: &DatabaseConnection,
    guild_id: &str,
    active: bool,
) -> Result<entity::poll::Model, DbErr> {
    entity::poll::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(next_snowflake()),
        message_id: ActiveValue::Set(next_snowflake()),
        author_id: ActiveValue::Set(next_snowflake()),
        question: ActiveValue::Set(format!("Question {}?", next_id())),
        options: ActiveValue::Set("Yes|No".to_string()),
        active: ActiveValue::Set(active),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
