//! Runtime configuration from the environment (and `.env` when present).

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
const DEFAULT_CURRENCY: &str = "EUR";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub catalog_path: PathBuf,
    /// Label attached to prices in responses; amounts are never converted.
    pub currency: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR is not a socket address: {}", bind_addr))?;

        Ok(Self {
            bind_addr,
            catalog_path: lookup("CATALOG_PATH")
                .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
                .into(),
            currency: lookup("PRICE_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }
}
