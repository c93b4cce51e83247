use chrono::{DateTime, Utc};
use std::fmt;

use crate::{error::AppError, util::parse::parse_u64_from_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Closed => "closed",
        }
    }

    /// Unknown stored values are read as closed.
    pub fn from_db(value: &str) -> Self {
        match value {
            "open" => TicketStatus::Open,
            _ => TicketStatus::Closed,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub user_id: u64,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            status: TicketStatus::from_db(&entity.status),
            created_at: entity.created_at,
        })
    }
}

/// Channel name for a new ticket: `ticket-<username>`, lower-cased.
pub fn ticket_channel_name(username: &str) -> String {
    format!("ticket-{}", username.to_lowercase())
}
