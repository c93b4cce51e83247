use crate::{data::deals::NotificationConfigRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod config;
