use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `LOG_LEVEL` and every dependency
/// at `warn`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dreamclub={}", config.log_level)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
/// - `migrate` - Whether to run pending migrations after connecting
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database, migrated when asked
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    config: &Config,
    migrate: bool,
) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if migrate {
        Migrator::up(&db, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(db)
}
