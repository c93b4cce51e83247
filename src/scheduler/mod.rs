//! Periodic jobs of the `MAIN` bot.
//!
//! Each job selects the rows whose time has come, performs one side effect per row and
//! marks the row processed in the same pass. A failure on one row is logged and the pass
//! moves on to the next.

pub mod backups;
pub mod birthdays;
pub mod daily_quote;
pub mod deals;
pub mod feeds;
pub mod giveaways;
pub mod reminders;
pub mod stats;

use std::{future::Future, sync::Arc};

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::service::backup::BackupSettings;

const GIVEAWAY_SCHEDULE: &str = "*/30 * * * * *";
const REMINDER_SCHEDULE: &str = "*/30 * * * * *";
/// 08:00 UTC
const BIRTHDAY_SCHEDULE: &str = "0 0 8 * * *";
/// 09:00 UTC
const DAILY_QUOTE_SCHEDULE: &str = "0 0 9 * * *";
const STATS_SCHEDULE: &str = "0 */10 * * * *";
const FEEDS_SCHEDULE: &str = "0 */15 * * * *";
const DEALS_SCHEDULE: &str = "0 */30 * * * *";
/// Every 6 hours
const BACKUP_SCHEDULE: &str = "0 0 */6 * * *";

/// Starts the giveaway, reminder, birthday, daily quote, statistics, feed, free game and
/// backup jobs
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client used to post announcements
/// - `backup_settings`: Where the periodic backups go and how many are kept
/// - `web`: HTTP client for feeds and the free game listing
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler; keep it alive for the process lifetime
/// - `Err(AppError::SchedulerErr)` - A job could not be created or the scheduler failed to start
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    backup_settings: BackupSettings,
    web: reqwest::Client,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler
        .add(polling_job(
            "giveaways",
            GIVEAWAY_SCHEDULE,
            &db,
            &discord_http,
            |db, http| async move { giveaways::process_due_giveaways(&db, &http, Utc::now()).await },
        )?)
        .await?;

    scheduler
        .add(polling_job(
            "reminders",
            REMINDER_SCHEDULE,
            &db,
            &discord_http,
            |db, http| async move { reminders::process_due_reminders(&db, &http, Utc::now()).await },
        )?)
        .await?;

    scheduler
        .add(polling_job(
            "birthdays",
            BIRTHDAY_SCHEDULE,
            &db,
            &discord_http,
            |db, http| async move { birthdays::celebrate_birthdays(&db, &http, Utc::now()).await },
        )?)
        .await?;

    scheduler
        .add(polling_job(
            "daily quote",
            DAILY_QUOTE_SCHEDULE,
            &db,
            &discord_http,
            |db, http| async move { daily_quote::post_daily_quotes(&db, &http).await },
        )?)
        .await?;

    scheduler
        .add(polling_job(
            "statistics",
            STATS_SCHEDULE,
            &db,
            &discord_http,
            |db, http| async move { stats::refresh_stat_channels(&db, &http, Utc::now()).await },
        )?)
        .await?;

    let feeds_web = web.clone();
    scheduler
        .add(polling_job(
            "feeds",
            FEEDS_SCHEDULE,
            &db,
            &discord_http,
            move |db, http| {
                let web = feeds_web.clone();
                async move { feeds::check_feeds(&db, &http, &web, Utc::now()).await }
            },
        )?)
        .await?;

    scheduler
        .add(polling_job(
            "free games",
            DEALS_SCHEDULE,
            &db,
            &discord_http,
            move |db, http| {
                let web = web.clone();
                async move { deals::announce_deals(&db, &http, &web).await.map(|_| ()) }
            },
        )?)
        .await?;

    scheduler
        .add(polling_job(
            "backups",
            BACKUP_SCHEDULE,
            &db,
            &discord_http,
            move |db, _http| {
                let settings = backup_settings.clone();
                async move { backups::take_backup(&db, &settings, Utc::now()).await }
            },
        )?)
        .await?;

    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(scheduler)
}

/// Wraps a pass in a cron job.
///
/// A pass that is still running when the next tick fires makes that tick a no-op, so a
/// slow pass never processes the same rows twice.
fn polling_job<F, Fut>(
    name: &'static str,
    schedule: &str,
    db: &DatabaseConnection,
    discord_http: &Arc<Http>,
    pass: F,
) -> Result<Job, AppError>
where
    F: Fn(DatabaseConnection, Arc<Http>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), AppError>> + Send + 'static,
{
    let job_db = db.clone();
    let job_http = discord_http.clone();
    let running = Arc::new(Mutex::new(()));

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();
        let pass = pass.clone();
        let running = running.clone();

        Box::pin(async move {
            let Ok(_guard) = running.try_lock_owned() else {
                tracing::debug!("Previous {} pass still running, skipping", name);
                return;
            };

            if let Err(e) = pass(db, http).await {
                tracing::error!("Error processing {}: {}", name, e);
            }
        })
    })?;

    Ok(job)
}
