use crate::{data::stats::StatChannelRepository, error::AppError, model::stats::StatKind};
use test_utils::{builder::TestBuilder, factory};

mod channel;
