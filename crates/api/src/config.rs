//! Environment-sourced configuration, read once at startup.

use anyhow::Context;

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port (`PORT`, default 8080).
    pub port: u16,
    /// Catalog endpoint base URL up to the key query parameter (`INTERNAL_BASE_URL`).
    pub catalog_base_url: String,
    /// Pre-shared catalog access key (`INTERNAL_KEY`).
    pub catalog_api_key: String,
    pub store: StoreConfig,
}

/// Document-store connection settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub user: String,
    pub pass: String,
    pub host: String,
    pub database: String,
    pub collection: String,
}

impl StoreConfig {
    pub fn connection_string(&self) -> String {
        format!("mongodb+srv://{}:{}@{}", self.user, self.pass, self.host)
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a valid port number")?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,
            catalog_base_url: require("INTERNAL_BASE_URL")?,
            catalog_api_key: require("INTERNAL_KEY")?,
            store: StoreConfig {
                user: require("MONGO_USER")?,
                pass: require("MONGO_PASS")?,
                host: require("MONGO_BASE_URL")?,
                database: optional("PRICING_DB", "myRetail"),
                collection: optional("PRICING_COLLECTION", "pricing"),
            },
        })
    }
}

fn require(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("{key} must be set"))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
