//! Session identification for ephemeral engagement state.
//!
//! Clients pick a UUID per browser session and send it as `x-session-id`.
//! This namespaces like toggles and nothing more - it is deliberately not
//! authentication.

use axum::http::HeaderMap;

use crate::common::SessionId;
use crate::server::error::ApiError;

pub const SESSION_HEADER: &str = "x-session-id";

/// Read the session id header if present. A malformed value is a client
/// error rather than an anonymous request.
pub fn session_from_headers(headers: &HeaderMap) -> Result<Option<SessionId>, ApiError> {
    let Some(value) = headers.get(SESSION_HEADER) else {
        return Ok(None);
    };

    let raw = value
        .to_str()
        .map_err(|_| ApiError::InvalidSession("not valid ascii".to_string()))?;

    SessionId::parse(raw)
        .map(Some)
        .map_err(|_| ApiError::InvalidSession(raw.to_string()))
}

/// Like `session_from_headers`, but the header is mandatory.
pub fn require_session(headers: &HeaderMap) -> Result<SessionId, ApiError> {
    session_from_headers(headers)?.ok_or(ApiError::MissingSession)
}
