//! Typed ID definitions for all domain entities.
//!
//! Type aliases over [`Id`] give each entity its own incompatible ID type,
//! so a `SessionId` can never be passed where a `ListingId` is expected.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for catalog listings.
pub struct Listing;

/// Marker type for browser sessions (ephemeral engagement state only).
pub struct Session;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for catalog listings.
pub type ListingId = Id<Listing>;

/// Typed ID for browser sessions.
pub type SessionId = Id<Session>;
