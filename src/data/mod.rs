//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `crate::model`, converting at this boundary. All database queries, inserts, updates and
//! deletes are performed through these repositories.

pub mod afk;
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
pub mod shop_item;
pub mod starboard;
pub mod stats;
pub mod tag;
pub mod ticket;
pub mod tribe;
pub mod user;

#[cfg(test)]
mod test;
