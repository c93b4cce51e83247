use crate::{data::ticket::TicketRepository, error::AppError, model::ticket::TicketStatus};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod close;
