use crate::{data::poll::PollRepository, error::AppError, model::poll::CreatePollParam};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod deactivate;
