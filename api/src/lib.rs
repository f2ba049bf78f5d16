//! First-party HTTP API over the catalog gateway.
//!
//! # Overview
//! Parses request parameters into filters and ids, calls the gateway, and
//! maps its three outcomes (data, absent, error) onto HTTP responses. All
//! decision logic lives in `catalog-core`; this crate is routing and wiring.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

use axum::{routing::get, Router};
use catalog_core::{Catalog, CancellationToken, ReqwestExecutor};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::ApiConfig;
pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog<ReqwestExecutor>,
    shutdown: CancellationToken,
}

impl AppState {
    /// `shutdown` is cancelled when the server stops; every upstream call in
    /// flight at that moment resolves as cancelled.
    pub fn new(catalog: Catalog<ReqwestExecutor>, shutdown: CancellationToken) -> Self {
        Self { catalog, shutdown }
    }

    /// A token for one request, cancelled together with the server.
    pub fn request_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}

pub fn app(state: AppState, config: &ApiConfig) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origin = if config.allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(config.allowed_origins.clone())
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
