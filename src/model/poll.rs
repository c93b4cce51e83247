use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Reactions members vote with, one per answer in order.
pub const NUMBER_EMOJIS: [&str; 10] = [
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = NUMBER_EMOJIS.len();

/// Separator between answers when typed and when stored.
pub const OPTION_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq)]
pub struct Poll {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Message members react to
    pub message_id: u64,
    pub author_id: u64,
    pub question: String,
    pub options: Vec<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Poll {
    pub fn from_entity(entity: entity::poll::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            author_id: parse_u64_from_string(entity.author_id)?,
            question: entity.question,
            options: entity
                .options
                .split(OPTION_SEPARATOR)
                .map(str::to_string)
                .collect(),
            active: entity.active,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreatePollParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub author_id: u64,
    pub question: String,
    pub options: Vec<String>,
}
