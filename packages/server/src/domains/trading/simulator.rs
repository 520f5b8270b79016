//! Simulated trading.
//!
//! Buy, relist, and mint are stand-ins for chain transactions: each call
//! validates its input, waits a configured settlement delay, and returns a
//! receipt carrying a synthetic signature. No call changes any state - the
//! catalog stays exactly as it was loaded.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use crate::common::ListingId;
use crate::domains::catalog::{Category, Listing};

/// Royalty cap applied to mint requests, in percent.
const MAX_ROYALTY_PCT: u32 = 50;

/// Rejected trade input
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TradeError {
    #[error("Listing price must be greater than zero")]
    NonPositivePrice,

    #[error("Name is required")]
    MissingName,

    #[error("An image is required")]
    MissingImage,

    #[error("Price must not be negative")]
    NegativePrice,

    #[error("Royalty cannot exceed {MAX_ROYALTY_PCT}%")]
    RoyaltyTooHigh,
}

/// What kind of trade a receipt settles
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TradeKind {
    Purchase,
    Listed,
    Minted,
}

/// Outcome of a simulated trade
#[derive(Debug, Clone, Serialize)]
pub struct TradeReceipt {
    pub kind: TradeKind,
    /// Absent for mints - the minted token never enters the catalog.
    pub listing_id: Option<ListingId>,
    pub token_id: String,
    pub price: Decimal,
    /// Synthetic signature; unique per call, not a real chain signature.
    pub signature: String,
    pub submitted_at: DateTime<Utc>,
    pub confirmed_at: DateTime<Utc>,
}

/// A property attached to a minted token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintProperty {
    pub key: String,
    pub value: String,
}

/// Input for a simulated mint, mirroring the create form
#[derive(Debug, Clone, Deserialize)]
pub struct MintRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    pub price: Decimal,
    pub category: Category,
    #[serde(default)]
    pub royalty_pct: Decimal,
    #[serde(default)]
    pub properties: Vec<MintProperty>,
}

/// Runs simulated trades with a fixed settlement delay.
#[derive(Debug, Clone)]
pub struct TradeSimulator {
    settlement_delay: Duration,
}

impl TradeSimulator {
    pub fn new(settlement_delay: Duration) -> Self {
        Self { settlement_delay }
    }

    /// Simulate buying a listing at its asking price.
    pub async fn purchase(&self, listing: &Listing) -> TradeReceipt {
        self.settle(TradeKind::Purchase, Some(listing.id), &listing.token_id, listing.price)
            .await
    }

    /// Simulate putting a listing back on sale at a new price.
    pub async fn relist(
        &self,
        listing: &Listing,
        price: Decimal,
    ) -> Result<TradeReceipt, TradeError> {
        if price <= Decimal::ZERO {
            return Err(TradeError::NonPositivePrice);
        }
        Ok(self
            .settle(TradeKind::Listed, Some(listing.id), &listing.token_id, price)
            .await)
    }

    /// Simulate minting a new token. Validates the request, then returns a
    /// receipt with a fresh token id. The catalog is not touched.
    pub async fn mint(&self, request: &MintRequest) -> Result<TradeReceipt, TradeError> {
        if request.name.trim().is_empty() {
            return Err(TradeError::MissingName);
        }
        if request.image_url.trim().is_empty() {
            return Err(TradeError::MissingImage);
        }
        if request.price < Decimal::ZERO {
            return Err(TradeError::NegativePrice);
        }
        if request.royalty_pct > Decimal::from(MAX_ROYALTY_PCT) {
            return Err(TradeError::RoyaltyTooHigh);
        }

        let token_id = mint_token_id();
        Ok(self
            .settle(TradeKind::Minted, None, &token_id, request.price)
            .await)
    }

    async fn settle(
        &self,
        kind: TradeKind,
        listing_id: Option<ListingId>,
        token_id: &str,
        price: Decimal,
    ) -> TradeReceipt {
        let submitted_at = Utc::now();
        tokio::time::sleep(self.settlement_delay).await;
        let confirmed_at = Utc::now();

        TradeReceipt {
            kind,
            listing_id,
            token_id: token_id.to_string(),
            price,
            signature: synthetic_signature(token_id, submitted_at),
            submitted_at,
            confirmed_at,
        }
    }
}

/// Hex SHA-256 over the trade identity plus a random nonce, so two trades of
/// the same listing still get distinct signatures.
fn synthetic_signature(token_id: &str, submitted_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token_id.as_bytes());
    hasher.update(submitted_at.to_rfc3339().as_bytes());
    hasher.update(Uuid::new_v4().as_bytes());
    hex::encode(hasher.finalize())
}

fn mint_token_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("#{}", &uuid[..6].to_uppercase())
}
