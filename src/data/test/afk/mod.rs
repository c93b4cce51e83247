use crate::{data::afk::AfkRepository, error::AppError};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod find_many;
mod upsert;
