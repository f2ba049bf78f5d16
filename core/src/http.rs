//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The core describes requests and responses as plain data. `Transport`
//! builds an `HttpRequest` and interprets the `HttpResponse`; the round trip
//! in between is delegated to an `HttpExecutor`. Production code uses
//! `ReqwestExecutor`; tests plug in executors that return canned responses,
//! which keeps path building and response normalization deterministic.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::error::{ConfigError, UpstreamError};

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL including the query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data. The body is fully read before
/// the value is constructed.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Performs the network round trip for an `HttpRequest`.
///
/// Implementations must return non-2xx statuses as data rather than as
/// errors; `UpstreamError` is reserved for requests that produced no
/// response at all.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, UpstreamError>;
}

/// `HttpExecutor` backed by a pooled `reqwest::Client`.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.client_name.as_str())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, UpstreamError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| UpstreamError::Request(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| UpstreamError::Request(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        let response = self
            .client
            .get(&request.url)
            .headers(headers)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!(url = %request.url, status, bytes = body.len(), "upstream responded");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let mut response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 304;
        assert!(!response.is_success());
        response.status = 404;
        assert!(!response.is_success());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: String::new(),
        };
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("etag"), None);
    }

    #[test]
    fn executor_builds_from_default_config() {
        assert!(ReqwestExecutor::new(&UpstreamConfig::default()).is_ok());
    }
}
