use crate::{data::giveaway::GiveawayRepository, error::AppError};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod deactivate;
mod get_due;
