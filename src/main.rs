mod bot;
mod config;
mod data;
mod error;
mod launcher;
mod model;
mod music;
mod scheduler;
mod service;
mod startup;
mod util;
mod web;

use clap::{Parser, Subcommand};

use crate::{config::Config, error::AppError};

/// Dream Club community bot.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
enum Command {
    /// Start every bot and the dashboard as child processes and watch them (default)
    Launch,
    /// Run one bot; the profile comes from BOT_PROFILE
    Bot,
    /// Run the dashboard HTTP server
    Web,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config);

    if let Err(e) = run(cli.command.unwrap_or(Command::Launch), &config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> Result<(), AppError> {
    match command {
        Command::Launch => launcher::run(config).await,
        Command::Bot => {
            tracing::info!("Starting bot process with profile {}", config.profile);

            // Only MAIN migrates; the launcher delays the other processes until it has
            let db = startup::connect_to_database(config, config.profile.is_main()).await?;

            bot::start::start_bot(config, db).await
        }
        Command::Web => web::serve(config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_is_the_default() {
        let cli = Cli::try_parse_from(["dreamclub"]).unwrap();
        assert_eq!(cli.command, None);

        let cli = Cli::try_parse_from(["dreamclub", "bot"]).unwrap();
        assert_eq!(cli.command, Some(Command::Bot));
    }

    #[test]
    fn rejects_unknown_subcommands() {
        assert!(Cli::try_parse_from(["dreamclub", "deploy"]).is_err());
    }
}
