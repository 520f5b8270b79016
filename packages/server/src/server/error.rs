use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domains::trading::TradeError;

/// API errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Listing not found")]
    ListingNotFound,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Missing x-session-id header")]
    MissingSession,

    #[error("Invalid session id: {0}")]
    InvalidSession(String),

    #[error(transparent)]
    InvalidTrade(#[from] TradeError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::ListingNotFound | ApiError::ProfileNotFound => StatusCode::NOT_FOUND,
            ApiError::UnknownCategory(_)
            | ApiError::MissingSession
            | ApiError::InvalidSession(_)
            | ApiError::InvalidTrade(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
