// Nebula Market - API core
//
// This crate provides the backend API for a simulated NFT marketplace:
// a fixture-backed listing catalog, the query pipeline over it, ephemeral
// per-session engagement state, and simulated trading. Nothing here touches
// a chain or a database; the catalog is loaded once at startup and stays
// immutable for the life of the process.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
