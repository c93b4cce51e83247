use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::afk::AfkRepository,
    error::AppError,
    model::afk::{AfkStatus, DEFAULT_AFK_REASON},
};

pub struct AfkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AfkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a member AFK, falling back to the default reason.
    ///
    /// `original_nick` is the nickname worn before the AFK prefix was added.
    pub async fn set(
        &self,
        user_id: u64,
        guild_id: u64,
        reason: Option<&str>,
        original_nick: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<AfkStatus, AppError> {
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_AFK_REASON);

        AfkRepository::new(self.db)
            .upsert(user_id, guild_id, reason.to_string(), original_nick, now)
            .await
    }

    /// Clears the status of a member who is back.
    ///
    /// # Returns
    /// - `Ok(Some(AfkStatus))` - The status that was removed
    /// - `Ok(None)` - The member was not AFK
    pub async fn clear(&self, user_id: u64) -> Result<Option<AfkStatus>, AppError> {
        let repo = AfkRepository::new(self.db);

        let Some(status) = repo.find(user_id).await? else {
            return Ok(None);
        };
        if !repo.delete(user_id).await? {
            return Ok(None);
        }

        Ok(Some(status))
    }

    /// AFK statuses of the mentioned members.
    pub async fn mentioned(&self, user_ids: &[u64]) -> Result<Vec<AfkStatus>, AppError> {
        AfkRepository::new(self.db).find_many(user_ids).await
    }
}
