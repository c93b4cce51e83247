use std::fmt;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Placeholder replaced by the current value in a channel name template.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// What a statistics channel displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Members,
    Online,
    Date,
}

impl StatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Members => "members",
            StatKind::Online => "online",
            StatKind::Date => "date",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "members" => Some(StatKind::Members),
            "online" => Some(StatKind::Online),
            "date" => Some(StatKind::Date),
            _ => None,
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voice channel whose name shows a live server statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct StatChannel {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub kind: StatKind,
    /// Channel name with a `{count}` placeholder
    pub name_format: String,
}

impl StatChannel {
    pub fn from_entity(entity: entity::stat_channel::Model) -> Result<Self, AppError> {
        let kind = StatKind::from_db(&entity.kind).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown statistic '{}' on channel {}",
                entity.kind, entity.channel_id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            kind,
            name_format: entity.name_format,
        })
    }
}

/// Default channels created by the statistics setup, in display order.
pub const DEFAULT_STAT_CHANNELS: [(StatKind, &str); 3] = [
    (StatKind::Members, "👥 Members: {count}"),
    (StatKind::Online, "🟢 Online: {count}"),
    (StatKind::Date, "📅 Date: {count}"),
];
