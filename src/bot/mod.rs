//! Discord gateway client.
//!
//! `start` builds the serenity client for one profile, `handler` receives gateway events
//! and `command` holds the slash command definitions and their implementations.

pub mod command;
pub mod discord_error;
pub mod embed;
pub mod handler;
pub mod start;
