//! Creator profile routes.

use axum::extract::{Extension, Path};
use axum::Json;

use crate::domains::profiles::{profile_for, CreatorProfile};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Creator profile derived from the catalog
pub async fn profile_handler(
    Extension(state): Extension<AppState>,
    Path(address): Path<String>,
) -> Result<Json<CreatorProfile>, ApiError> {
    profile_for(&state.catalog, &address)
        .map(Json)
        .ok_or(ApiError::ProfileNotFound)
}
