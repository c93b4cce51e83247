use crate::{data::starboard::StarboardRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod config;
