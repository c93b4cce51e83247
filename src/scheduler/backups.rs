use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    error::AppError,
    service::backup::{BackupService, BackupSettings},
};

/// Takes the periodic database backup.
pub async fn take_backup(
    db: &DatabaseConnection,
    settings: &BackupSettings,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    BackupService::new(db, settings).create(now).await?;

    Ok(())
}
