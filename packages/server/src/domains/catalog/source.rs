//! Where the listing collection comes from.
//!
//! The catalog itself does not care: anything implementing [`ListingSource`]
//! can feed it. The only shipped implementation reads a static JSON fixture,
//! standing in for whatever data-fetch layer a real deployment would have.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::models::Listing;

/// Embedded default fixture, compiled into the binary.
const EMBEDDED_FIXTURE: &str = include_str!("../../../fixtures/listings.json");

/// Provider of the initial listing collection.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Listing>>;
}

/// Loads listings from a JSON fixture.
///
/// With no path configured the embedded fixture is used, so the server runs
/// with zero external files.
pub struct FixtureSource {
    path: Option<PathBuf>,
}

impl FixtureSource {
    pub fn embedded() -> Self {
        Self { path: None }
    }

    pub fn from_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

#[async_trait]
impl ListingSource for FixtureSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        let raw = match &self.path {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read listings fixture {}", path.display()))?,
            None => EMBEDDED_FIXTURE.to_string(),
        };

        serde_json::from_str(&raw).context("Failed to parse listings fixture")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::models::Category;
    use crate::domains::catalog::Catalog;

    #[tokio::test]
    async fn embedded_fixture_parses() {
        let listings = FixtureSource::embedded().load().await.unwrap();
        assert!(!listings.is_empty());

        // The embedded fixture must be a valid catalog...
        let catalog = Catalog::new(listings).unwrap();

        // ...and broad enough to exercise every filter option.
        for category in Category::ALL {
            assert!(
                catalog.all().iter().any(|l| l.category == category),
                "fixture has no {} listing",
                category
            );
        }
    }

    #[tokio::test]
    async fn missing_fixture_path_is_an_error() {
        let source = FixtureSource::from_path(PathBuf::from("/nonexistent/listings.json"));
        assert!(source.load().await.is_err());
    }
}
