pub mod listing;

pub use listing::{Category, Listing, Rarity};
