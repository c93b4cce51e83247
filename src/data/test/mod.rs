mod afk;
mod birthday;
mod challenge;
mod deals;
mod feed;
mod giveaway;
mod goal;
mod guild_config;
mod habit;
mod journal;
mod level_reward;
mod poll;
mod reminder;
mod shop_item;
mod starboard;
mod stats;
mod tag;
mod ticket;
mod tribe;
mod user;
