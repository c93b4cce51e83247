//! Classification of Discord API failures.

use serenity::http::StatusCode;

/// Whether a status code means the channel, message or member no longer exists.
pub fn is_not_found_status(status: Option<StatusCode>) -> bool {
    status == Some(StatusCode::NOT_FOUND)
}

/// True when Discord answered 404 (Unknown Channel, Unknown Message, Unknown Member...).
///
/// Rate limits, outages, missing permissions and transport failures all return `false`
/// so callers can retry them later.
pub fn is_unknown_resource(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http) => is_not_found_status(http.status_code()),
        _ => false,
    }
}
