//! Private journal.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::journal::JournalRepository,
    error::AppError,
    model::{
        journal::{JournalEntry, JOURNAL_READ_LIMIT, JOURNAL_XP, MAX_ENTRY_LENGTH},
        user::XpGain,
    },
    service::user::UserService,
};

pub struct JournalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JournalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an entry and pays the writing XP.
    pub async fn write(
        &self,
        user_id: u64,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<(JournalEntry, XpGain), AppError> {
        let content = content.trim();
        if content.is_empty() || content.chars().count() > MAX_ENTRY_LENGTH {
            return Err(AppError::BadRequest(format!(
                "An entry must be 1 to {} characters.",
                MAX_ENTRY_LENGTH
            )));
        }

        let entry = JournalRepository::new(self.db)
            .create(user_id, content, now)
            .await?;
        let gain = UserService::new(self.db).add_xp(user_id, JOURNAL_XP).await?;

        Ok((entry, gain))
    }

    pub async fn latest(&self, user_id: u64) -> Result<Vec<JournalEntry>, AppError> {
        JournalRepository::new(self.db)
            .get_latest(user_id, JOURNAL_READ_LIMIT)
            .await
    }
}
