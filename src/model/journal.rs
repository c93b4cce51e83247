use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// XP for each entry written.
pub const JOURNAL_XP: i64 = 50;
/// Entries sent by `/journal_read`.
pub const JOURNAL_READ_LIMIT: u64 = 5;
pub const MAX_ENTRY_LENGTH: usize = 2000;
pub const PREVIEW_LENGTH: usize = 200;

/// Private journal page of a member.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub id: i32,
    pub user_id: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn from_entity(entity: entity::journal_entry::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            content: entity.content,
            created_at: entity.created_at,
        })
    }

    /// Start of the entry, cut to the preview length.
    pub fn preview(&self) -> String {
        if self.content.chars().count() <= PREVIEW_LENGTH {
            return self.content.clone();
        }

        let cut: String = self.content.chars().take(PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    }
}
