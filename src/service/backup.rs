//! Database backups.
//!
//! Each backup is a consistent copy written by SQLite's `VACUUM INTO`, named after the
//! moment it was taken so file names sort chronologically.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::error::AppError;

const FILE_PREFIX: &str = "backup_";
const FILE_EXTENSION: &str = ".db";

/// Where backups go and how many are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSettings {
    pub dir: PathBuf,
    pub keep: usize,
}

/// `backup_<YYYY-MM-DD_HH-MM-SS>.db`
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    format!(
        "{}{}{}",
        FILE_PREFIX,
        now.format("%Y-%m-%d_%H-%M-%S"),
        FILE_EXTENSION
    )
}

fn is_backup_file(name: &str) -> bool {
    name.starts_with(FILE_PREFIX) && name.ends_with(FILE_EXTENSION)
}

/// Backup files beyond the newest `keep`, oldest first.
pub fn expired_backups(mut names: Vec<String>, keep: usize) -> Vec<String> {
    names.retain(|name| is_backup_file(name));
    names.sort();

    let excess = names.len().saturating_sub(keep);
    names.truncate(excess);
    names
}

pub struct BackupService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a BackupSettings,
}

impl<'a> BackupService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a BackupSettings) -> Self {
        Self { db, settings }
    }

    /// Writes a backup and deletes the ones beyond the configured count.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the new backup file
    /// - `Err(AppError::BadRequest)` - A backup was already taken this second
    /// - `Err(AppError)` - The directory or the copy could not be written
    pub async fn create(&self, now: DateTime<Utc>) -> Result<PathBuf, AppError> {
        tokio::fs::create_dir_all(&self.settings.dir).await?;

        let path = self.settings.dir.join(backup_file_name(now));
        if tokio::fs::try_exists(&path).await? {
            return Err(AppError::BadRequest(
                "A backup was just taken, try again in a moment.".to_string(),
            ));
        }

        let target = path.to_string_lossy().replace('\'', "''");
        self.db
            .execute_unprepared(&format!("VACUUM INTO '{}'", target))
            .await?;

        tracing::info!("Database backup written to {}", path.display());

        for removed in self.prune().await? {
            tracing::info!("Removed old backup {}", removed.display());
        }

        Ok(path)
    }

    /// Deletes the oldest backups beyond the configured count.
    pub async fn prune(&self) -> Result<Vec<PathBuf>, AppError> {
        let expired = expired_backups(self.list().await?, self.settings.keep);

        let mut removed = Vec::with_capacity(expired.len());
        for name in expired {
            let path = self.settings.dir.join(name);
            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed.push(path),
                Err(e) => tracing::error!("Failed to remove backup {}: {}", path.display(), e),
            }
        }

        Ok(removed)
    }

    /// Most recent backup file, if any.
    pub async fn latest(&self) -> Result<Option<PathBuf>, AppError> {
        let mut names = self.list().await?;
        names.retain(|name| is_backup_file(name));
        names.sort();

        Ok(names.pop().map(|name| self.settings.dir.join(name)))
    }

    async fn list(&self) -> Result<Vec<String>, AppError> {
        list_dir(&self.settings.dir).await
    }
}

async fn list_dir(dir: &Path) -> Result<Vec<String>, AppError> {
    if !tokio::fs::try_exists(dir).await? {
        return Ok(Vec::new());
    }

    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn names_backups_by_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 3, 7, 18, 5, 9).unwrap();
        assert_eq!(backup_file_name(now), "backup_2026-03-07_18-05-09.db");
    }

    #[test]
    fn expires_oldest_backups_only() {
        let names = vec![
            "backup_2026-03-03_00-00-00.db".to_string(),
            "notes.txt".to_string(),
            "backup_2026-03-01_00-00-00.db".to_string(),
            "backup_2026-03-02_00-00-00.db".to_string(),
        ];

        assert_eq!(
            expired_backups(names.clone(), 2),
            vec!["backup_2026-03-01_00-00-00.db".to_string()]
        );
        assert!(expired_backups(names, 5).is_empty());
    }
}
