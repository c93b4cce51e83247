use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

#[derive(Debug, Clone, PartialEq)]
pub struct Giveaway {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Announcement message participants react to
    pub message_id: u64,
    pub prize: String,
    pub winners_count: i32,
    pub end_time: DateTime<Utc>,
    pub active: bool,
}

impl Giveaway {
    pub fn from_entity(entity: entity::giveaway::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            prize: entity.prize,
            winners_count: entity.winners_count,
            end_time: entity.end_time,
            active: entity.active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateGiveawayParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub prize: String,
    pub winners_count: i32,
    pub end_time: DateTime<Utc>,
}
