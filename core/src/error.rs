//! Error types for the catalog gateway.
//!
//! # Design
//! Three kinds of failure reach callers: input rejected before any I/O
//! (`InvalidArgument`), the upstream misbehaving (`Upstream`), and the caller
//! abandoning the call (`Cancelled`). `NotFound` gets a dedicated upstream
//! variant because the gateway turns it into an absent result instead of an
//! error; every other non-2xx response lands in `Status` with the raw code and
//! body for debugging.

use thiserror::Error;

/// Errors returned by gateway and transport operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Locally detected bad input. Never reaches the network.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The caller's cancellation token fired before the response arrived.
    #[error("request cancelled")]
    Cancelled,
}

impl GatewayError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GatewayError::InvalidArgument(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Upstream(UpstreamError::NotFound { .. }))
    }
}

/// Failures attributable to the upstream service or the path to it.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream returned 404. `body` is the upstream's own message,
    /// e.g. `{"error":"Character not found"}`.
    #[error("resource not found: {body}")]
    NotFound { body: String },

    /// The upstream returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("malformed body: {0}")]
    MalformedBody(String),

    /// The request never produced a response (connection refused, DNS, reset).
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,
}

/// Errors raised while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
