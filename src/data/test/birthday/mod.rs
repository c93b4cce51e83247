use crate::{data::birthday::BirthdayRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_uncelebrated_on;
mod upsert;
