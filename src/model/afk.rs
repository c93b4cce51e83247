use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Default reason used by `/afk` without arguments.
pub const DEFAULT_AFK_REASON: &str = "Busy";

/// Prefix added to the nickname of AFK members.
pub const AFK_NICK_PREFIX: &str = "[AFK] ";

/// Discord's nickname length limit, in characters.
pub const MAX_NICK_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct AfkStatus {
    pub user_id: u64,
    pub guild_id: u64,
    pub reason: String,
    /// Nickname to put back when the member returns
    pub original_nick: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl AfkStatus {
    pub fn from_entity(entity: entity::afk_status::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            reason: entity.reason,
            original_nick: entity.original_nick,
            start_time: entity.start_time,
        })
    }
}

/// Nickname shown while AFK, truncated to Discord's limit.
pub fn afk_nickname(display_name: &str) -> String {
    format!("{}{}", AFK_NICK_PREFIX, display_name)
        .chars()
        .take(MAX_NICK_LENGTH)
        .collect()
}

pub fn is_afk_nickname(nickname: &str) -> bool {
    nickname.starts_with(AFK_NICK_PREFIX)
}

/// Nickname to set once an AFK member is back.
///
/// The stored original is restored in full even when the AFK nickname was truncated. An
/// empty string clears the nickname of members who had none.
///
/// # Returns
/// - `Some(String)` - The nickname to apply
/// - `None` - The member no longer wears the AFK nickname, leave it alone
pub fn restored_nickname(current: Option<&str>, original: Option<&str>) -> Option<String> {
    match current {
        Some(nick) if is_afk_nickname(nick) => Some(original.unwrap_or_default().to_string()),
        _ => None,
    }
}
