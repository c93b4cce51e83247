//! Goal factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a goal of `user_id`, completed or pending.
pub async fn create_goal(
    db: &DatabaseConnection,
    user_id: &str,
    completed: bool,
) -> Result<entity::goal::Model, DbErr> {
    let now = Utc::now();

    entity::goal::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        description: ActiveValue::Set(format!("Goal {}", next_id())),
        completed: ActiveValue::Set(completed),
        created_at: ActiveValue::Set(now),
        completed_at: ActiveValue::Set(completed.then_some(now)),
        ..Default::default()
    }
    .insert(db)
    .await
}
