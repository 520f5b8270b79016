//! Listing catalog routes: the explore query, featured shelf, detail view,
//! similar listings, and the per-session like toggle.

use axum::extract::{Extension, Path, Query};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{paginate, Connection, ListingId, PageArgs};
use crate::domains::catalog::store::{DEFAULT_FEATURED, DEFAULT_SIMILAR};
use crate::domains::catalog::{CategoryFilter, Listing, ListingQuery, SortKey};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::session::{require_session, session_from_headers};

#[derive(Debug, Deserialize)]
pub struct ListingsParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

/// Query listings with search, category filter, sort, and pagination
pub async fn query_listings_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListingsParams>,
) -> Result<Json<Connection<Listing>>, ApiError> {
    // An unknown category token is a client error; an unknown sort key
    // silently falls back to newest.
    let category = match params.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => CategoryFilter::parse(raw)
            .map_err(|_| ApiError::UnknownCategory(raw.to_string()))?,
    };

    let query = ListingQuery {
        search: params.search.unwrap_or_default(),
        category,
        sort: SortKey::parse_lenient(params.sort.as_deref()),
    };

    let filtered = query.apply(state.catalog.all());

    let page = PageArgs {
        limit: params.limit,
        offset: params.offset,
    }
    .validate();

    Ok(Json(paginate(filtered, &page)))
}

#[derive(Debug, Deserialize)]
pub struct ShelfParams {
    pub limit: Option<usize>,
}

/// The landing page's featured shelf
pub async fn featured_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ShelfParams>,
) -> Json<Vec<Listing>> {
    let limit = params.limit.unwrap_or(DEFAULT_FEATURED);
    Json(state.catalog.featured(limit).to_vec())
}

#[derive(Serialize)]
pub struct ListingDetailResponse {
    pub listing: Listing,
    /// Whether the requesting session likes this listing; absent for
    /// anonymous requests.
    pub liked: Option<bool>,
    /// Base like count plus this process's session likes.
    pub likes: u64,
}

/// Single listing detail, session-aware when `x-session-id` is sent
pub async fn listing_detail_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<ListingDetailResponse>, ApiError> {
    let id = ListingId::from_uuid(id);
    let listing = state.catalog.get(id).ok_or(ApiError::ListingNotFound)?;

    let liked = match session_from_headers(&headers)? {
        Some(session) => Some(state.engagement.is_liked(session, id).await),
        None => None,
    };
    let likes = state.engagement.display_likes(listing).await;

    Ok(Json(ListingDetailResponse {
        listing: listing.clone(),
        liked,
        likes,
    }))
}

/// Other listings shown under a detail view
pub async fn similar_listings_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ShelfParams>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    let id = ListingId::from_uuid(id);
    if state.catalog.get(id).is_none() {
        return Err(ApiError::ListingNotFound);
    }

    let limit = params.limit.unwrap_or(DEFAULT_SIMILAR);
    let similar: Vec<Listing> = state
        .catalog
        .similar_to(id, limit)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(similar))
}

#[derive(Serialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub likes: u64,
}

/// Toggle the requesting session's like for a listing
pub async fn toggle_like_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<LikeResponse>, ApiError> {
    let session = require_session(&headers)?;
    let id = ListingId::from_uuid(id);
    let listing = state.catalog.get(id).ok_or(ApiError::ListingNotFound)?;

    let liked = state.engagement.toggle(session, id).await;
    let likes = state.engagement.display_likes(listing).await;

    Ok(Json(LikeResponse { liked, likes }))
}
