use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::ListingId;

/// Listing - a single marketplace entry
///
/// Records are immutable after the catalog is built. The `likes` field is
/// the base count shipped with the fixture; per-session like toggles live in
/// the engagement store and never write back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,

    // Content
    pub name: String,
    pub description: String,
    pub image_url: String,

    // Market data
    pub price: Decimal,
    pub category: Category,
    pub rarity: Option<Rarity>,

    // Engagement counters
    pub likes: u64,
    pub views: u64,

    // Provenance (display only - not verified on-chain identities)
    pub creator: String,
    pub creator_address: String,
    pub token_id: String,

    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Enums
// =============================================================================

/// Listing category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Art,
    Collectibles,
    Gaming,
    Music,
    Photography,
    Video,
    Sports,
    Utility,
    Other,
}

impl Category {
    /// Every category, in the order the filter bar presents them.
    pub const ALL: [Category; 9] = [
        Category::Art,
        Category::Collectibles,
        Category::Gaming,
        Category::Music,
        Category::Photography,
        Category::Video,
        Category::Sports,
        Category::Utility,
        Category::Other,
    ];

    /// Human-readable label for filter dropdowns.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Art => "Art",
            Category::Collectibles => "Collectibles",
            Category::Gaming => "Gaming",
            Category::Music => "Music",
            Category::Photography => "Photography",
            Category::Video => "Video",
            Category::Sports => "Sports",
            Category::Utility => "Utility",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Art => write!(f, "art"),
            Category::Collectibles => write!(f, "collectibles"),
            Category::Gaming => write!(f, "gaming"),
            Category::Music => write!(f, "music"),
            Category::Photography => write!(f, "photography"),
            Category::Video => write!(f, "video"),
            Category::Sports => write!(f, "sports"),
            Category::Utility => write!(f, "utility"),
            Category::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "art" => Ok(Category::Art),
            "collectibles" => Ok(Category::Collectibles),
            "gaming" => Ok(Category::Gaming),
            "music" => Ok(Category::Music),
            "photography" => Ok(Category::Photography),
            "video" => Ok(Category::Video),
            "sports" => Ok(Category::Sports),
            "utility" => Ok(Category::Utility),
            "other" => Ok(Category::Other),
            _ => Err(anyhow::anyhow!("Invalid category: {}", s)),
        }
    }
}

/// Rarity badge shown on listing cards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Epic => write!(f, "epic"),
            Rarity::Legendary => write!(f, "legendary"),
        }
    }
}

impl std::str::FromStr for Rarity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "epic" => Ok(Rarity::Epic),
            "legendary" => Ok(Rarity::Legendary),
            _ => Err(anyhow::anyhow!("Invalid rarity: {}", s)),
        }
    }
}
