use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::{model::api::ErrorDto, web::state::AppState};

/// Serves `index.html` for every path the API and static files do not handle, leaving
/// routing to the frontend.
pub async fn index(State(state): State<AppState>) -> Response {
    let path = state.static_dir.join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::debug!("Frontend not found at {}: {}", path.display(), e);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!(
                        "Frontend not found. Did you create {}?",
                        path.display()
                    ),
                }),
            )
                .into_response()
        }
    }
}
