use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::{ErrorDto, StatusDto},
        guild_config::{GuildConfigDto, UpdateGuildConfigDto, UpdateGuildConfigParam},
    },
    service::guild_config::GuildConfigService,
    web::state::AppState,
};

/// Tag for grouping guild configuration endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// Get the configuration of a guild.
///
/// Creates the configuration with default values when the guild has none yet.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - The guild configuration
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guild/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild configuration", body = GuildConfigDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_config(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let config = GuildConfigService::new(&state.db)
        .get_or_create(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

/// Save the dashboard settings of a guild.
///
/// Only the welcome template and the module switches editable from the dashboard are
/// written; unknown body fields are ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guild_id` - Discord guild ID
/// - `payload` - New settings
///
/// # Returns
/// - `200 OK` - Settings saved
/// - `404 Not Found` - The guild has no configuration yet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/guild/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = UpdateGuildConfigDto,
    responses(
        (status = 200, description = "Settings saved", body = StatusDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guild_config(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Json(payload): Json<UpdateGuildConfigDto>,
) -> Result<impl IntoResponse, AppError> {
    GuildConfigService::new(&state.db)
        .update(UpdateGuildConfigParam::from_dto(guild_id, payload))
        .await?;

    tracing::info!("Dashboard saved settings of guild {}", guild_id);

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "success".to_string(),
            message: "Settings saved!".to_string(),
        }),
    ))
}
