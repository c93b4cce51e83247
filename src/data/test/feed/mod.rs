use crate::{data::feed::FeedRepository, error::AppError};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod update;
