//! Generic "fetch JSON by path" primitive.
//!
//! # Design
//! `Transport` holds the base URL and an executor, and carries no mutable
//! state between calls; it is shared behind an `Arc` by every gateway. A
//! fetch is split into `build_request` and `parse_json` around a single
//! executor call, so the I/O boundary stays explicit and both halves are
//! testable without a network.

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{GatewayError, UpstreamError};
use crate::http::{HttpExecutor, HttpRequest, HttpResponse};

#[derive(Debug)]
pub struct Transport<E> {
    base_url: String,
    executor: E,
}

impl<E: HttpExecutor> Transport<E> {
    pub fn new(base_url: &str, executor: E) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            executor,
        }
    }

    /// Build the GET request for `path`, relative to the base URL.
    pub fn build_request(&self, path: &str) -> Result<HttpRequest, GatewayError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(GatewayError::invalid("request path must not be blank"));
        }
        Ok(HttpRequest {
            url: format!("{}/{}", self.base_url, path.trim_start_matches('/')),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Interpret a response as a JSON document of type `T`.
    pub fn parse_json<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, GatewayError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| {
            let reason = match response.header("content-type") {
                Some(content_type) => format!("{e} (content-type {content_type})"),
                None => e.to_string(),
            };
            UpstreamError::MalformedBody(reason).into()
        })
    }

    /// Issue one GET for `path` and deserialize the body.
    ///
    /// Resolves to `GatewayError::Cancelled` as soon as `cancel` fires; the
    /// in-flight request is dropped and nothing it received is returned.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<T, GatewayError> {
        let request = self.build_request(path)?;
        let url = request.url.clone();
        debug!(%url, "fetching from upstream");

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(%url, "upstream request cancelled");
                return Err(GatewayError::Cancelled);
            }
            result = self.executor.execute(request) => result,
        };

        let response = response.inspect_err(|e| warn!(%url, error = %e, "upstream request failed"))?;
        self.parse_json(response).inspect_err(|e| {
            if e.is_not_found() {
                debug!(%url, error = %e, "upstream has no such resource");
            } else {
                warn!(%url, error = %e, "upstream returned an unusable response");
            }
        })
    }
}

/// Map non-success status codes to the appropriate `UpstreamError` variant.
fn check_status(response: &HttpResponse) -> Result<(), UpstreamError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(UpstreamError::NotFound {
            body: response.body.clone(),
        });
    }
    Err(UpstreamError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
