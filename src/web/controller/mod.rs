pub mod guild_config;
pub mod spa;
