//! Domain models, operation parameters and API DTOs.
//!
//! Repositories convert SeaORM entity models into the domain models defined here at the
//! data boundary, so services and bot commands never touch entity types. Snowflakes are
//! stored as strings and parsed back into `u64` during that conversion.

pub mod afk;
pub mod api;
pub mod birthday;
pub mod challenge;
pub mod deals;
pub mod feed;
pub mod giveaway;
pub mod goal;
pub mod guild_config;
pub mod habit;
pub mod journal;
pub mod level_reward;
pub mod poll;
pub mod reminder;
pub mod shop;
pub mod starboard;
pub mod stats;
pub mod tag;
pub mod ticket;
pub mod tribe;
pub mod user;
