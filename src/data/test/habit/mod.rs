use crate::{data::habit::HabitRepository, error::AppError};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod checkin;
