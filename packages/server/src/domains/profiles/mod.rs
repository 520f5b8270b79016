//! Creator profiles derived from the catalog.
//!
//! There are no stored accounts. A profile is whatever the catalog says
//! about an address: the listings it created, in fixture order, plus summed
//! engagement and volume numbers.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domains::catalog::{Catalog, Listing};

/// A creator page: identity, their listings, and derived stats
#[derive(Debug, Clone, Serialize)]
pub struct CreatorProfile {
    pub address: String,
    pub username: String,
    pub created: Vec<Listing>,
    pub stats: CreatorStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatorStats {
    pub created_count: usize,
    pub total_volume: Decimal,
    pub total_views: u64,
    pub total_likes: u64,
}

/// Build the profile for an address, or `None` if it created nothing.
pub fn profile_for(catalog: &Catalog, address: &str) -> Option<CreatorProfile> {
    let created: Vec<Listing> = catalog
        .by_creator_address(address)
        .into_iter()
        .cloned()
        .collect();

    let first = created.first()?;

    let stats = CreatorStats {
        created_count: created.len(),
        total_volume: created.iter().map(|l| l.price).sum(),
        total_views: created.iter().map(|l| l.views).sum(),
        total_likes: created.iter().map(|l| l.likes).sum(),
    };

    Some(CreatorProfile {
        address: address.to_string(),
        username: first.creator.clone(),
        created,
        stats,
    })
}
