//! Ephemeral per-session like state.
//!
//! Likes are local UI state scoped to a browser session: they live in this
//! process, are lost on restart, and never write back to the catalog. The
//! displayed like count for a listing is its immutable base count plus the
//! number of sessions currently liking it here.

use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;

use crate::common::{ListingId, SessionId};
use crate::domains::catalog::Listing;

/// Which sessions currently like which listings.
#[derive(Debug, Default)]
pub struct EngagementStore {
    likes: RwLock<HashMap<ListingId, HashSet<SessionId>>>,
}

impl EngagementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the session's like for a listing. Returns the new state.
    pub async fn toggle(&self, session: SessionId, listing: ListingId) -> bool {
        let mut likes = self.likes.write().await;
        let sessions = likes.entry(listing).or_default();
        if sessions.remove(&session) {
            if sessions.is_empty() {
                likes.remove(&listing);
            }
            false
        } else {
            sessions.insert(session);
            true
        }
    }

    pub async fn is_liked(&self, session: SessionId, listing: ListingId) -> bool {
        self.likes
            .read()
            .await
            .get(&listing)
            .is_some_and(|sessions| sessions.contains(&session))
    }

    /// How many sessions currently like this listing.
    pub async fn like_delta(&self, listing: ListingId) -> u64 {
        self.likes
            .read()
            .await
            .get(&listing)
            .map_or(0, |sessions| sessions.len() as u64)
    }

    /// Base count from the catalog plus this process's session likes.
    pub async fn display_likes(&self, listing: &Listing) -> u64 {
        listing.likes + self.like_delta(listing.id).await
    }
}
