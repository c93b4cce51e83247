use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::{
        GuildModule, GuildSetting, UpdateGuildConfigParam, DEFAULT_WELCOME_MESSAGE,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod set;
mod update;
mod with_welcome_channel;
