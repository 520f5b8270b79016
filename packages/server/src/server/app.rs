//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{HeaderName, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::catalog::Catalog;
use crate::domains::engagement::EngagementStore;
use crate::domains::trading::TradeSimulator;
use crate::server::routes::{
    buy_handler, categories_handler, featured_handler, health_handler, listing_detail_handler,
    mint_handler, profile_handler, query_listings_handler, relist_handler,
    similar_listings_handler, stats_handler, toggle_like_handler,
};
use crate::server::session::SESSION_HEADER;

/// Shared application state
///
/// The catalog is immutable after startup; the engagement store is the only
/// mutable piece and keeps its own interior locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub engagement: Arc<EngagementStore>,
    pub trades: Arc<TradeSimulator>,
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - the storefront runs on its own origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(SESSION_HEADER)]);

    // Rate limiting: 10 requests per second per IP with burst of 20.
    // Queries re-run on every keystroke, so the limit is deliberately loose.
    let rate_limit_config = std::sync::Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor) // Key on the X-Forwarded-For / Forwarded IP
            .use_headers() // Emit x-ratelimit-* response headers
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    Router::new()
        // Listing catalog
        .route(
            "/api/listings",
            get(query_listings_handler).post(mint_handler),
        )
        .route("/api/listings/featured", get(featured_handler))
        .route("/api/listings/:id", get(listing_detail_handler))
        .route("/api/listings/:id/similar", get(similar_listings_handler))
        // Engagement
        .route("/api/listings/:id/like", post(toggle_like_handler))
        // Simulated trading
        .route("/api/listings/:id/buy", post(buy_handler))
        .route("/api/listings/:id/relist", post(relist_handler))
        // Creators and marketplace aggregates
        .route("/api/profiles/:address", get(profile_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/categories", get(categories_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(rate_limit_layer)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
