//! Process configuration for the API server.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use catalog_core::{ConfigError, UpstreamConfig};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";

pub const ENV_BIND_ADDR: &str = "API_BIND_ADDR";
pub const ENV_ALLOWED_ORIGINS: &str = "API_ALLOWED_ORIGINS";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<HeaderValue>,
    pub upstream: UpstreamConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.trim().parse().map_err(|_| ConfigError::Invalid {
            key: ENV_BIND_ADDR,
            reason: format!("expected host:port, got {raw_addr:?}"),
        })?;

        let allowed_origins = get(ENV_ALLOWED_ORIGINS)
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| {
                HeaderValue::from_str(o).map_err(|e| ConfigError::Invalid {
                    key: ENV_ALLOWED_ORIGINS,
                    reason: format!("{o:?}: {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let upstream = UpstreamConfig::from_lookup(&lookup)?;

        Ok(Self {
            bind_addr,
            allowed_origins,
            upstream,
        })
    }
}
