use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::path::PathBuf;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::web::{router::router, state::AppState};

mod guild_config;
mod spa;

fn app(db: &DatabaseConnection, static_dir: PathBuf) -> Router {
    router(AppState::new(db.clone(), static_dir))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
