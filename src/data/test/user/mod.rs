use crate::{data::user::UserRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod rankings;
mod transfer;
mod try_spend;
