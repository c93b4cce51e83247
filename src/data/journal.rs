//! Journal repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{error::AppError, model::journal::JournalEntry};

pub struct JournalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JournalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: u64,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<JournalEntry, AppError> {
        let entity = entity::journal_entry::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        JournalEntry::from_entity(entity)
    }

    /// Most recent entries of a member, newest first.
    pub async fn get_latest(
        &self,
        user_id: u64,
        limit: u64,
    ) -> Result<Vec<JournalEntry>, AppError> {
        entity::prelude::JournalEntry::find()
            .filter(entity::journal_entry::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::journal_entry::Column::CreatedAt)
            .order_by_desc(entity::journal_entry::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(JournalEntry::from_entity)
            .collect()
    }
}
