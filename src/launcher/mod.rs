//! Process supervisor started by `dreamclub launch`.
//!
//! Spawns the `MAIN` bot, one bot per music token and the dashboard as child processes
//! of the current executable, then watches them until they all exit or a shutdown
//! signal arrives. Dead children are reported, never restarted.

pub mod plan;
pub mod supervisor;

use crate::{config::Config, error::AppError};

pub async fn run(config: &Config) -> Result<(), AppError> {
    let program = std::env::current_exe()?;
    let specs = plan::plan(config, program);

    tracing::info!("Dream Club system manager starting {} processes", specs.len());

    supervisor::supervise(specs, &config.web_address()).await
}
