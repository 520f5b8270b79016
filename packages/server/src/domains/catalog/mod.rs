pub mod models;
pub mod query;
pub mod source;
pub mod store;

// Re-export models (domain models)
pub use models::listing::{Category, Listing, Rarity};

// Re-export the query pipeline
pub use query::{CategoryFilter, ListingQuery, SortKey};

// Re-export the collection and its source seam
pub use source::{FixtureSource, ListingSource};
pub use store::{Catalog, MarketStats};
