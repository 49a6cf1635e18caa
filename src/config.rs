use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://www.frankfurter.app";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    pub api_base_url: String,
    pub target_currency: String,
    /// Left to the API's default when unset.
    pub base_currency: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr = var_or("FX_LISTEN_ADDR", "127.0.0.1:8000")
            .parse()
            .context("Invalid FX_LISTEN_ADDR")?;
        let db_max_connections = var_or("FX_DB_MAX_CONNECTIONS", "5")
            .parse()
            .context("Invalid FX_DB_MAX_CONNECTIONS")?;
        let base_currency = std::env::var("FX_BASE_CURRENCY")
            .ok()
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty());

        Ok(Self {
            listen_addr,
            database_url: var_or("FX_DATABASE_URL", "sqlite://exchange_rates.db"),
            db_max_connections,
            api_base_url: var_or("FX_API_BASE_URL", DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            target_currency: var_or("FX_TARGET_CURRENCY", "JPY").trim().to_uppercase(),
            base_currency,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
