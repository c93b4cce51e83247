//! Level reward factory.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a role reward unlocked at `level_required` in `guild_id`.
///
/// The role id is a freshly generated snowflake.
pub async fn create_level_reward(
    db: &DatabaseConnection,
    guild_id: &str,
    level_required: i32,
) -> Result<entity::level_reward::Model, DbErr> {
    create_level_reward_with_role(db, guild_id, level_required, next_snowflake()).await
}

/// Creates a role reward with an explicit role id.
pub async fn create_level_reward_with_role(
    db: &DatabaseConnection,
    guild_id: &str,
    level_required: i32,
    role_id: impl Into<String>,
) -> Result<entity::level_reward::Model, DbErr> {
    entity::level_reward::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        level_required: ActiveValue::Set(level_required),
        role_id: ActiveValue::Set(role_id.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
