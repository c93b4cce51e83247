use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: i32,
    pub user_id: u64,
    pub channel_id: u64,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub active: bool,
}

impl Reminder {
    pub fn from_entity(entity: entity::reminder::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            message: entity.message,
            created_at: entity.created_at,
            due_at: entity.due_at,
            active: entity.active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateReminderParam {
    pub user_id: u64,
    pub channel_id: u64,
    pub message: String,
    pub due_at: DateTime<Utc>,
}
