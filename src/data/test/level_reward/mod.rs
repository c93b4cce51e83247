use crate::{data::level_reward::LevelRewardRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_for_levels;
mod upsert;
