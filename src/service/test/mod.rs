mod challenge;
mod deals;
mod giveaway;
mod guild_config;
mod journal;
mod level_reward;
mod poll;
mod reminder;
mod starboard;
mod stats;
mod tag;
mod tribe;
mod user;
