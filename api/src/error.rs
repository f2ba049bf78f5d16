//! Mapping from gateway outcomes to HTTP responses.
//!
//! # Design
//! The gateway never picks status codes; this is the only place that does.
//! Absent data is 404, rejected input 400, a call cut short by shutdown 503,
//! and everything else a generic 500 whose detail only goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::GatewayError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("the service is shutting down")]
    Unavailable,

    #[error("internal server error")]
    Internal,
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidArgument(msg) => {
                warn!(%msg, "rejected request");
                ApiError::BadRequest(msg)
            }
            GatewayError::Cancelled => ApiError::Unavailable,
            GatewayError::Upstream(e) => {
                error!(error = %e, "upstream call failed");
                ApiError::Internal
            }
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
