use std::time::Duration;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::cache::Settings as CacheSettings;
use songbird::SerenityInit;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::music::player::MusicPlayer;
use crate::scheduler::start_scheduler;
use crate::service::automod::AutoModFilter;

/// Messages kept per channel so edits and deletions can be logged with their content.
const CACHED_MESSAGES_PER_CHANNEL: usize = 500;

/// Some feed and deal hosts reject requests without a browser user agent.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
const WEB_TIMEOUT: Duration = Duration::from_secs(20);

/// Starts the Discord bot for the configured profile
///
/// Blocks until the gateway connection shuts down. The `MAIN` profile also starts the
/// periodic jobs; music profiles only serve the music commands.
///
/// # Arguments
/// - `config` - Application configuration, selects the profile and its token
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the token is missing or the client fails to start
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    let token = config.token()?;

    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let web = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(WEB_TIMEOUT)
        .build()?;

    let handler = Handler::new(
        db.clone(),
        config.profile,
        // No total timeout for streams, it would cut long tracks
        MusicPlayer::new(reqwest::Client::new()),
        AutoModFilter::new()?,
        config.backup_settings(),
        web.clone(),
    );

    let mut cache_settings = CacheSettings::default();
    cache_settings.max_messages = CACHED_MESSAGES_PER_CHANNEL;

    let mut client = Client::builder(&token, intents)
        .cache_settings(cache_settings)
        .event_handler(handler)
        .register_songbird()
        .await?;

    // The scheduler lives as long as this process; dropping it does not stop its jobs
    let _scheduler = if config.profile.is_main() {
        Some(start_scheduler(db, client.http.clone(), config.backup_settings(), web).await?)
    } else {
        None
    };

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down Discord bot...");
            shard_manager.shutdown_all().await;
        }
    });

    tracing::info!("Starting Discord bot as {}...", config.profile);

    client.start().await?;

    Ok(())
}
