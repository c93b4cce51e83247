use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::afk::AfkStatus};

pub struct AfkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AfkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a member AFK. Re-using `/afk` updates the reason and guild but keeps the
    /// original start time and nickname.
    pub async fn upsert(
        &self,
        user_id: u64,
        guild_id: u64,
        reason: String,
        original_nick: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<AfkStatus, AppError> {
        let existing = entity::prelude::AfkStatus::find()
            .filter(entity::afk_status::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(entity) => {
                let mut active: entity::afk_status::ActiveModel = entity.into();
                active.guild_id = ActiveValue::Set(guild_id.to_string());
                active.reason = ActiveValue::Set(reason);
                active.update(self.db).await?
            }
            None => {
                entity::afk_status::ActiveModel {
                    user_id: ActiveValue::Set(user_id.to_string()),
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    reason: ActiveValue::Set(reason),
                    original_nick: ActiveValue::Set(original_nick),
                    start_time: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        AfkStatus::from_entity(entity)
    }

    pub async fn find(&self, user_id: u64) -> Result<Option<AfkStatus>, AppError> {
        entity::prelude::AfkStatus::find()
            .filter(entity::afk_status::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
            .map(AfkStatus::from_entity)
            .transpose()
    }

    /// Statuses of the given members that are currently AFK.
    pub async fn find_many(&self, user_ids: &[u64]) -> Result<Vec<AfkStatus>, AppError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = user_ids.iter().map(|id| id.to_string()).collect();
        entity::prelude::AfkStatus::find()
            .filter(entity::afk_status::Column::UserId.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(AfkStatus::from_entity)
            .collect()
    }

    /// Removes the AFK status.
    ///
    /// # Returns
    /// - `Ok(true)` - The member was AFK
    /// - `Ok(false)` - Nothing to remove
    pub async fn delete(&self, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::AfkStatus::delete_many()
            .filter(entity::afk_status::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
