//! Starboard factories.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates the starboard configuration of `guild_id` posting to a fresh channel.
pub async fn create_starboard_config(
    db: &DatabaseConnection,
    guild_id: &str,
    threshold: i32,
) -> Result<entity::starboard_config::Model, DbErr> {
    entity::starboard_config::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(next_snowflake()),
        threshold: ActiveValue::Set(threshold),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a starboard post for a fresh message of `guild_id`.
pub async fn create_starboard_entry(
    db: &DatabaseConnection,
    guild_id: &str,
    stars: i32,
) -> Result<entity::starboard_entry::Model, DbErr> {
    entity::starboard_entry::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        original_message_id: ActiveValue::Set(next_snowflake()),
        original_channel_id: ActiveValue::Set(next_snowflake()),
        starboard_message_id: ActiveValue::Set(next_snowflake()),
        stars: ActiveValue::Set(stars),
        ..Default::default()
    }
    .insert(db)
    .await
}
