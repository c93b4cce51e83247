use crate::{
    data::challenge::ChallengeRepository, error::AppError, model::challenge::CreateChallengeParam,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod active;
mod completion;
