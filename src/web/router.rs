use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        guild_config::{GuildConfigDto, UpdateGuildConfigDto},
    },
    web::{
        controller::{guild_config, spa},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Dream Club dashboard API"),
    tags((name = "guild", description = "Per-guild bot configuration")),
    components(schemas(GuildConfigDto, UpdateGuildConfigDto, StatusDto, ErrorDto))
)]
pub struct ApiDoc;

/// Dashboard routes: the JSON API, its OpenAPI document, static assets and the
/// single-page fallback.
pub fn router(state: AppState) -> Router {
    let (api, openapi) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            guild_config::get_guild_config,
            guild_config::update_guild_config
        ))
        .split_for_parts();

    let static_files = ServeDir::new(&state.static_dir);

    api.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .nest_service("/static", static_files)
        .fallback(spa::index)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
