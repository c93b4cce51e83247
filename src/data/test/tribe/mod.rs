use crate::{data::tribe::TribeRepository, error::AppError};
use chrono::Utc;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod membership;
