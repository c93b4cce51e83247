//! Journal entry factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a journal entry of `user_id` written at `created_at`.
pub async fn create_journal_entry(
    db: &DatabaseConnection,
    user_id: &str,
    content: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::journal_entry::Model, DbErr> {
    entity::journal_entry::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        content: ActiveValue::Set(content.to_string()),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
