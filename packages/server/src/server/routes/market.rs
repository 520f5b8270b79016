//! Marketplace-wide lookups: aggregate stats and the category option list.

use axum::extract::Extension;
use axum::Json;
use serde::Serialize;

use crate::domains::catalog::{Category, MarketStats};
use crate::server::app::AppState;

/// Aggregates for the landing page stat row
pub async fn stats_handler(Extension(state): Extension<AppState>) -> Json<MarketStats> {
    Json(state.catalog.stats())
}

#[derive(Serialize)]
pub struct CategoryOption {
    pub value: Category,
    pub label: &'static str,
}

/// Category values with display labels, in filter-bar order
pub async fn categories_handler() -> Json<Vec<CategoryOption>> {
    Json(
        Category::ALL
            .into_iter()
            .map(|category| CategoryOption {
                value: category,
                label: category.label(),
            })
            .collect(),
    )
}
