use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::reminder::ReminderRepository,
    error::AppError,
    model::reminder::{CreateReminderParam, Reminder},
};

/// Shortest delay accepted by `/remind`.
pub const MIN_REMINDER_SECS: i64 = 10;

pub struct ReminderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a reminder `delay` from `now`.
    pub async fn create(
        &self,
        user_id: u64,
        channel_id: u64,
        message: &str,
        delay: Duration,
        now: DateTime<Utc>,
    ) -> Result<Reminder, AppError> {
        if delay < Duration::seconds(MIN_REMINDER_SECS) {
            return Err(AppError::BadRequest(format!(
                "Reminders must be at least {} seconds away.",
                MIN_REMINDER_SECS
            )));
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::BadRequest(
                "Tell me what to remind you about.".to_string(),
            ));
        }

        ReminderRepository::new(self.db)
            .create(
                CreateReminderParam {
                    user_id,
                    channel_id,
                    message: message.to_string(),
                    due_at: now + delay,
                },
                now,
            )
            .await
    }

    pub async fn due(&self, now: DateTime<Utc>) -> Result<Vec<Reminder>, AppError> {
        ReminderRepository::new(self.db).get_due(now).await
    }

    pub async fn mark_sent(&self, id: i32) -> Result<bool, AppError> {
        ReminderRepository::new(self.db).deactivate(id).await
    }
}
