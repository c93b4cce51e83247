use crate::{data::goal::GoalRepository, error::AppError};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod complete;
