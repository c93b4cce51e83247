//! Reminder factory.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active reminder due at `due_at` for a generated user and channel.
pub async fn create_reminder(
    db: &DatabaseConnection,
    due_at: DateTime<Utc>,
) -> Result<entity::reminder::Model, DbErr> {
    create_reminder_with_state(db, due_at, true).await
}

/// Creates a reminder with an explicit active flag.
pub async fn create_reminder_with_state(
    db: &DatabaseConnection,
    due_at: DateTime<Utc>,
    active: bool,
) -> Result<entity::reminder::Model, DbErr> {
    entity::reminder::ActiveModel {
        user_id: ActiveValue::Set(next_snowflake()),
        channel_id: ActiveValue::Set(next_snowflake()),
        message: ActiveValue::Set(format!("Reminder {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        due_at: ActiveValue::Set(due_at),
        active: ActiveValue::Set(active),
        ..Default::default()
    }
    .insert(db)
    .await
}
