//! Aggregation gateway over the public character/location/episode catalog.
//!
//! # Overview
//! Turns partially-populated filter criteria into the upstream query dialect,
//! fetches single records, filtered pages and ad-hoc batches, validates ids
//! before any network call, and normalizes upstream answers (not-found, the
//! batch-of-one quirk) into a uniform shape.
//!
//! # Design
//! - `ResourceGateway<R, E>` is generic over the record type; the `Resource`
//!   and `QueryFilter` impls are the per-kind table (collection path, filter
//!   field order).
//! - `Transport` splits every fetch into `build_request` and `parse_json`
//!   around one `HttpExecutor` call, so the I/O boundary is explicit and the
//!   core is testable with canned responses.
//! - Every async operation takes a `CancellationToken` and resolves to
//!   `GatewayError::Cancelled` once it fires.
//! - Nothing is cached, retried or shared mutably between calls.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod query;
pub mod resource;
pub mod transport;
pub mod types;
pub mod validate;

pub use config::UpstreamConfig;
pub use error::{ConfigError, GatewayError, UpstreamError};
pub use gateway::{Catalog, ResourceGateway};
pub use http::{HttpExecutor, HttpRequest, HttpResponse, ReqwestExecutor};
pub use query::build_query_path;
pub use resource::{QueryFilter, Resource};
pub use transport::Transport;
pub use types::{
    Character, CharacterFilter, Episode, EpisodeFilter, Location, LocationFilter,
    LocationReference, Page, PageInfo,
};
pub use validate::{validate_id, validate_ids};

pub use tokio_util::sync::CancellationToken;
