use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    catalog: CatalogHealth,
}

#[derive(Serialize)]
pub struct CatalogHealth {
    listings: usize,
}

/// Health check endpoint
///
/// The catalog is loaded before the server binds, so liveness implies
/// readiness here; the listing count is reported for operator sanity.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            catalog: CatalogHealth {
                listings: state.catalog.len(),
            },
        }),
    )
}
