//! Challenge factories.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a 200 XP challenge in `guild_id` started at `created_at`.
pub async fn create_challenge(
    db: &DatabaseConnection,
    guild_id: &str,
    active: bool,
    created_at: DateTime<Utc>,
) -> Result<entity::challenge::Model, DbErr> {
    entity::challenge::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        title: ActiveValue::Set(format!("Challenge {}", next_id())),
        description: ActiveValue::Set("Do the thing".to_string()),
        xp_reward: ActiveValue::Set(200),
        active: ActiveValue::Set(active),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_challenge_completion(
    db: &DatabaseConnection,
    challenge_id: i32,
    user_id: &str,
) -> Result<entity::challenge_completion::Model, DbErr> {
    entity::challenge_completion::ActiveModel {
        challenge_id: ActiveValue::Set(challenge_id),
        user_id: ActiveValue::Set(user_id.to_string()),
        completed_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
