use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Optional path overriding the embedded listings fixture
    pub listings_fixture: Option<PathBuf>,
    /// How long simulated trades take to "settle"
    pub settlement_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            listings_fixture: env::var("LISTINGS_FIXTURE").ok().map(PathBuf::from),
            settlement_delay_ms: env::var("SETTLEMENT_DELAY_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .context("SETTLEMENT_DELAY_MS must be a valid number")?,
        })
    }

    pub fn settlement_delay(&self) -> Duration {
        Duration::from_millis(self.settlement_delay_ms)
    }
}
