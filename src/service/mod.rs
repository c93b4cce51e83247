//! Business logic for every feature module.
//!
//! Services validate input, call one or more repositories and return domain models.
//! Randomness is drawn by the caller and passed in, which keeps the rules here
//! deterministic.

pub mod afk;
pub mod automod;
pub mod backup;
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

#[cfg(test)]
mod test;
