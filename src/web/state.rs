//! State shared by the dashboard handlers.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Directory holding the single-page frontend
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(db: DatabaseConnection, static_dir: PathBuf) -> Self {
        Self { db, static_dir }
    }
}
