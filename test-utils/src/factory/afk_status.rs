//! AFK status factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks `user_id` as AFK in `guild_id` since `start_time`, with `Ana` as the nickname
/// worn before.
pub async fn create_afk_status(
    db: &DatabaseConnection,
    user_id: &str,
    guild_id: &str,
    reason: &str,
    start_time: DateTime<Utc>,
) -> Result<entity::afk_status::Model, DbErr> {
    entity::afk_status::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        reason: ActiveValue::Set(reason.to_string()),
        original_nick: ActiveValue::Set(Some("Ana".to_string())),
        start_time: ActiveValue::Set(start_time),
        ..Default::default()
    }
    .insert(db)
    .await
}
