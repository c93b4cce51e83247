//! Dashboard HTTP server started by `dreamclub web`.

pub mod controller;
pub mod router;
pub mod state;

#[cfg(test)]
mod test;

use tokio::net::TcpListener;

use crate::{config::Config, error::AppError, startup, web::state::AppState};

/// Serves the dashboard until the process receives Ctrl+C.
pub async fn serve(config: &Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(config, true).await?;
    let state = AppState::new(db, config.web_static_dir.clone());

    let address = config.web_address();
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("Dashboard listening on http://{}", address);

    axum::serve(listener, router::router(state))
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutting down dashboard...");
            }
        })
        .await?;

    Ok(())
}
