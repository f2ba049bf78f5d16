//! Upstream connection settings.
//!
//! Read once at startup and passed explicitly into the transport; nothing
//! here is global or reloadable.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CLIENT_NAME: &str = "RickAndMortyApiClient";

pub const ENV_BASE_URL: &str = "CATALOG_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CATALOG_TIMEOUT_SECS";
pub const ENV_CLIENT_NAME: &str = "CATALOG_CLIENT_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Sent as the `User-Agent` of every upstream request.
    pub client_name: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client_name: DEFAULT_CLIENT_NAME.to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to the
    /// defaults for unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let base_url = get(ENV_BASE_URL).unwrap_or(defaults.base_url);
        Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
            key: ENV_BASE_URL,
            reason: e.to_string(),
        })?;

        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: ENV_TIMEOUT_SECS,
                    reason: format!("expected a whole number of seconds, got {raw:?}"),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        key: ENV_TIMEOUT_SECS,
                        reason: "timeout must be at least one second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let client_name = get(ENV_CLIENT_NAME).unwrap_or(defaults.client_name);

        Ok(Self {
            base_url,
            timeout,
            client_name,
        })
    }
}
