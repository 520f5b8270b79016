//! Simulated trading routes. Each returns a receipt after the configured
//! settlement delay; nothing here mutates the catalog.

use axum::extract::{Extension, Path};
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::common::ListingId;
use crate::domains::trading::{MintRequest, TradeReceipt};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Simulated purchase at the asking price
pub async fn buy_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TradeReceipt>, ApiError> {
    let id = ListingId::from_uuid(id);
    let listing = state.catalog.get(id).ok_or(ApiError::ListingNotFound)?;

    Ok(Json(state.trades.purchase(listing).await))
}

#[derive(Debug, Deserialize)]
pub struct RelistRequest {
    pub price: Decimal,
}

/// Simulated re-listing at a new price
pub async fn relist_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RelistRequest>,
) -> Result<Json<TradeReceipt>, ApiError> {
    let id = ListingId::from_uuid(id);
    let listing = state.catalog.get(id).ok_or(ApiError::ListingNotFound)?;

    let receipt = state.trades.relist(listing, request.price).await?;
    Ok(Json(receipt))
}

/// Simulated mint of a new token
pub async fn mint_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<MintRequest>,
) -> Result<Json<TradeReceipt>, ApiError> {
    let receipt = state.trades.mint(&request).await?;
    Ok(Json(receipt))
}
