use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "convolog";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen address when BIND_ADDR is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("invalid BIND_ADDR {addr}: {reason}")]
    InvalidBindAddr { addr: String, reason: String },
}

/// Process configuration, loaded once at startup. A missing store
/// location or bearer secret is fatal.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: PathBuf,
    pub api_token: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("API_TOKEN").ok(),
            std::env::var("BIND_ADDR").ok(),
        )
    }

    fn from_values(
        database_url: Option<String>,
        api_token: Option<String>,
        bind_addr: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let api_token = api_token
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("API_TOKEN"))?;

        let addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                addr: addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: PathBuf::from(database_url),
            api_token,
            bind_addr,
        })
    }
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "convolog=info,tower_http=info"
}
