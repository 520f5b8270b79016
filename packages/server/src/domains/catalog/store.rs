//! The in-memory listing collection.
//!
//! Built once at startup from a [`ListingSource`](super::source::ListingSource)
//! and never mutated afterwards. Everything here is a read over the fixture
//! order, so "featured" and "similar" slices are deterministic.

use std::collections::{HashMap, HashSet};

use anyhow::{bail, Result};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::common::ListingId;

use super::models::Listing;

/// Default number of listings on the featured shelf.
pub const DEFAULT_FEATURED: usize = 6;

/// Default number of similar listings shown under a detail view.
pub const DEFAULT_SIMILAR: usize = 4;

/// Immutable listing collection with a by-id index.
#[derive(Debug)]
pub struct Catalog {
    listings: Vec<Listing>,
    by_id: HashMap<ListingId, usize>,
}

impl Catalog {
    /// Build the catalog, indexing listings by id.
    ///
    /// Duplicate ids are a fixture bug and fail startup.
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(listings.len());
        for (index, listing) in listings.iter().enumerate() {
            if by_id.insert(listing.id, index).is_some() {
                bail!("Duplicate listing id in fixture: {}", listing.id);
            }
        }
        Ok(Self { listings, by_id })
    }

    /// The full collection in fixture order.
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Find a listing by id.
    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.by_id.get(&id).map(|&index| &self.listings[index])
    }

    /// The featured shelf: the first `limit` listings in fixture order.
    pub fn featured(&self, limit: usize) -> &[Listing] {
        &self.listings[..limit.min(self.listings.len())]
    }

    /// Up to `limit` other listings shown alongside a detail view.
    pub fn similar_to(&self, id: ListingId, limit: usize) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| listing.id != id)
            .take(limit)
            .collect()
    }

    /// All listings created by the given address, in fixture order.
    pub fn by_creator_address(&self, address: &str) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| listing.creator_address == address)
            .collect()
    }

    /// Marketplace-wide aggregates for the landing page.
    pub fn stats(&self) -> MarketStats {
        let creators: HashSet<&str> = self
            .listings
            .iter()
            .map(|listing| listing.creator_address.as_str())
            .collect();

        MarketStats {
            total_listings: self.listings.len(),
            total_volume: self.listings.iter().map(|l| l.price).sum(),
            total_views: self.listings.iter().map(|l| l.views).sum(),
            total_likes: self.listings.iter().map(|l| l.likes).sum(),
            creators: creators.len(),
        }
    }
}

/// Aggregates derived from the catalog
#[derive(Debug, Clone, Serialize)]
pub struct MarketStats {
    pub total_listings: usize,
    pub total_volume: Decimal,
    pub total_views: u64,
    pub total_likes: u64,
    pub creators: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::models::Category;
    use chrono::{TimeZone, Utc};

    fn listing(name: &str, creator_address: &str, price: &str, likes: u64) -> Listing {
        Listing {
            id: ListingId::new(),
            name: name.to_string(),
            description: String::new(),
            image_url: String::new(),
            price: price.parse().unwrap(),
            category: Category::Art,
            rarity: None,
            likes,
            views: 10,
            creator: "Creator".to_string(),
            creator_address: creator_address.to_string(),
            token_id: "#0001".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn duplicate_ids_fail_construction() {
        let a = listing("A", "addr-1", "1", 0);
        let mut b = listing("B", "addr-1", "2", 0);
        b.id = a.id;
        assert!(Catalog::new(vec![a, b]).is_err());
    }

    #[test]
    fn get_finds_by_id() {
        let a = listing("A", "addr-1", "1", 0);
        let id = a.id;
        let catalog = Catalog::new(vec![a, listing("B", "addr-2", "2", 0)]).unwrap();
        assert_eq!(catalog.get(id).unwrap().name, "A");
        assert!(catalog.get(ListingId::new()).is_none());
    }

    #[test]
    fn featured_takes_a_prefix() {
        let catalog = Catalog::new(vec![
            listing("A", "addr-1", "1", 0),
            listing("B", "addr-2", "2", 0),
            listing("C", "addr-3", "3", 0),
        ])
        .unwrap();
        let shelf = catalog.featured(2);
        assert_eq!(shelf.len(), 2);
        assert_eq!(shelf[0].name, "A");

        // Asking for more than exists returns everything
        assert_eq!(catalog.featured(10).len(), 3);
    }

    #[test]
    fn similar_excludes_the_subject() {
        let a = listing("A", "addr-1", "1", 0);
        let id = a.id;
        let catalog = Catalog::new(vec![
            a,
            listing("B", "addr-2", "2", 0),
            listing("C", "addr-3", "3", 0),
        ])
        .unwrap();
        let similar = catalog.similar_to(id, 10);
        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|l| l.id != id));
    }

    #[test]
    fn stats_sum_the_catalog() {
        let catalog = Catalog::new(vec![
            listing("A", "addr-1", "1.5", 3),
            listing("B", "addr-1", "2.5", 7),
            listing("C", "addr-2", "1.0", 0),
        ])
        .unwrap();
        let stats = catalog.stats();
        assert_eq!(stats.total_listings, 3);
        assert_eq!(stats.total_volume, "5.0".parse::<Decimal>().unwrap());
        assert_eq!(stats.total_views, 30);
        assert_eq!(stats.total_likes, 10);
        assert_eq!(stats.creators, 2);
    }
}
