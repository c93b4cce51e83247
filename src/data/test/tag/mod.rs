use crate::{data::tag::TagRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod use_tag;
