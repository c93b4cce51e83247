use crate::{error::AppError, model::user::DailyClaim, service::user::UserService};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod add_xp;
mod bets;
mod daily;
mod pay;
mod set_bio;
