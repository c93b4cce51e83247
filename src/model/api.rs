use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing dashboard endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Acknowledgement returned after a successful write.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub status: String,
    pub message: String,
}
