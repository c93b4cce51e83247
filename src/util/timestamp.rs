use chrono::{DateTime, Utc};
use serenity::all::Timestamp;

use crate::error::{internal::InternalError, AppError};

/// Renders a Discord relative timestamp such as "in 5 minutes".
pub fn relative(time: DateTime<Utc>) -> String {
    format!("<t:{}:R>", time.timestamp())
}

/// Renders a Discord full date/time timestamp.
pub fn full(time: DateTime<Utc>) -> String {
    format!("<t:{}:F>", time.timestamp())
}

/// Converts a UTC time into a Discord embed timestamp.
///
/// # Returns
/// - `Ok(Timestamp)` - Converted timestamp
/// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - Out of Discord's range
pub fn to_discord(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    let timestamp = time.timestamp();
    Timestamp::from_unix_timestamp(timestamp).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp,
            reason: e.to_string(),
        }
        .into()
    })
}
