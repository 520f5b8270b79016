//! The listing query pipeline: free-text search, category filter, sort.
//!
//! This is a pure function over the catalog slice. Filters run before the
//! sort, search before category; both only ever narrow the set. Sorting is
//! stable, so listings with equal keys keep their catalog order. The whole
//! pipeline is cheap enough to re-run on every keystroke.

use serde::{Deserialize, Serialize};

use super::models::{Category, Listing};

/// Sort order for listing queries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    Popular,
}

impl SortKey {
    /// Parse a sort token from the query string.
    ///
    /// Unrecognized or absent tokens fall back to `newest` - a bad sort key
    /// is never an error.
    pub fn parse_lenient(s: Option<&str>) -> Self {
        match s {
            Some(token) => token.parse().unwrap_or_default(),
            None => SortKey::default(),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Newest => write!(f, "newest"),
            SortKey::Oldest => write!(f, "oldest"),
            SortKey::PriceLow => write!(f, "price-low"),
            SortKey::PriceHigh => write!(f, "price-high"),
            SortKey::Popular => write!(f, "popular"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "popular" => Ok(SortKey::Popular),
            _ => Err(anyhow::anyhow!("Invalid sort key: {}", s)),
        }
    }
}

/// Category filter with an "all" sentinel meaning no filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter token: `all` (or empty) means no filter, anything else
    /// must be a known category.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "" | "all" => Ok(CategoryFilter::All),
            other => Ok(CategoryFilter::Only(other.parse()?)),
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => listing.category == *category,
        }
    }
}

/// Query parameters for the listing pipeline
///
/// The default query (empty search, all categories, newest first) returns
/// the whole catalog ordered by creation time descending.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Free-text term matched case-insensitively against listing name and
    /// creator label. Empty means no filter.
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl ListingQuery {
    /// Run the pipeline: filter by search term, filter by category, sort.
    ///
    /// Pure and deterministic - the input slice is never touched, and equal
    /// sort keys preserve input order. An empty result is an empty vector,
    /// never an error.
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        let needle = self.search.to_lowercase();

        let mut matched: Vec<&Listing> = listings
            .iter()
            .filter(|listing| matches_search(listing, &needle) && self.category.matches(listing))
            .collect();

        // `sort_by` is stable: ties keep catalog order.
        match self.sort {
            SortKey::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortKey::PriceLow => matched.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHigh => matched.sort_by(|a, b| b.price.cmp(&a.price)),
            // Popularity is the immutable base like count; session likes are
            // display state and never reorder results.
            SortKey::Popular => matched.sort_by(|a, b| b.likes.cmp(&a.likes)),
        }

        matched.into_iter().cloned().collect()
    }
}

fn matches_search(listing: &Listing, needle: &str) -> bool {
    needle.is_empty()
        || listing.name.to_lowercase().contains(needle)
        || listing.creator.to_lowercase().contains(needle)
}
