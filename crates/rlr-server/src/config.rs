//! Server configuration, read from `RLR_*` environment variables.

use std::net::SocketAddr;

use rlr_auth::AuthConfig;
use rlr_db::DbConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address (default: `127.0.0.1:8080`).
    pub bind_addr: SocketAddr,
    /// Bearer key granting administrator rights. Admin access is
    /// disabled when unset.
    pub admin_api_key: Option<String>,
    pub db: DbConfig,
    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            admin_api_key: None,
            db: DbConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable source. Unset
    /// or empty variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(addr) = var("RLR_BIND_ADDR") {
            config.bind_addr = addr.parse().map_err(|_| ConfigError::Invalid {
                name: "RLR_BIND_ADDR",
                value: addr,
            })?;
        }
        config.admin_api_key = var("RLR_ADMIN_API_KEY");
        config.auth.pepper = var("RLR_PEPPER");

        if let Some(url) = var("RLR_DB_URL") {
            config.db.url = url;
        }
        if let Some(ns) = var("RLR_DB_NAMESPACE") {
            config.db.namespace = ns;
        }
        if let Some(db) = var("RLR_DB_DATABASE") {
            config.db.database = db;
        }
        if let Some(user) = var("RLR_DB_USERNAME") {
            config.db.username = user;
        }
        if let Some(pass) = var("RLR_DB_PASSWORD") {
            config.db.password = pass;
        }

        Ok(config)
    }
}
