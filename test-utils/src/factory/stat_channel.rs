//! Statistics channel factory.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a member count channel in `guild_id`.
pub async fn create_stat_channel(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::stat_channel::Model, DbErr> {
    entity::stat_channel::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(next_snowflake()),
        kind: ActiveValue::Set("members".to_string()),
        name_format: ActiveValue::Set("👥 Members: {count}".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
