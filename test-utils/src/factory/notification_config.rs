//! Free game notification factory.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates the announcement settings of `guild_id`.
///
/// `channel` decides whether an announcement channel is set.
pub async fn create_notification_config(
    db: &DatabaseConnection,
    guild_id: &str,
    channel: bool,
    last_game_id: Option<&str>,
) -> Result<entity::notification_config::Model, DbErr> {
    entity::notification_config::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        free_games_channel_id: ActiveValue::Set(channel.then(next_snowflake)),
        mention_role_id: ActiveValue::Set(None),
        last_game_id: ActiveValue::Set(last_game_id.map(str::to_string)),
        ..Default::default()
    }
    .insert(db)
    .await
}
