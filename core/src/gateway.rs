//! Resource gateway: validate, translate, fetch, normalize.
//!
//! # Design
//! One generic `ResourceGateway<R, E>` serves every resource kind; the
//! per-kind differences (collection path, filter fields) come from the
//! `Resource` table. A not-found upstream answer becomes `Ok(None)` so callers
//! can tell "no data" from a failure; every other error propagates unchanged.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::error::{ConfigError, GatewayError, UpstreamError};
use crate::http::{HttpExecutor, ReqwestExecutor};
use crate::query::build_query_path;
use crate::resource::Resource;
use crate::transport::Transport;
use crate::types::{Character, Episode, Location, Page};
use crate::validate::{validate_id, validate_ids};

/// The batch endpoint answers a single id with a bare object and several ids
/// with an array.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Read-only access to one upstream collection.
pub struct ResourceGateway<R, E> {
    transport: Arc<Transport<E>>,
    _kind: PhantomData<fn() -> R>,
}

impl<R, E> Clone for ResourceGateway<R, E> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            _kind: PhantomData,
        }
    }
}

impl<R: Resource, E> fmt::Debug for ResourceGateway<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceGateway")
            .field("collection", &R::COLLECTION)
            .finish()
    }
}

impl<R: Resource, E: HttpExecutor> ResourceGateway<R, E> {
    pub fn new(transport: Arc<Transport<E>>) -> Self {
        Self {
            transport,
            _kind: PhantomData,
        }
    }

    /// One page of the collection, optionally filtered. `None` when the
    /// upstream reports no matches.
    pub async fn list(
        &self,
        filter: Option<&R::Filter>,
        cancel: &CancellationToken,
    ) -> Result<Option<Page<R>>, GatewayError> {
        let path = build_query_path(R::COLLECTION, filter);
        let page: Option<Page<R>> =
            absent_on_not_found(self.transport.fetch_json(&path, cancel).await)?;
        if page.is_none() {
            debug!(kind = R::COLLECTION, %path, "no matches upstream");
        }
        Ok(page)
    }

    /// A single record. `None` when the upstream does not know the id.
    pub async fn get_by_id(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> Result<Option<R>, GatewayError> {
        validate_id(id)?;
        let path = format!("{}/{id}", R::COLLECTION);
        let Some(record) = absent_on_not_found(self.transport.fetch_json::<R>(&path, cancel).await)?
        else {
            debug!(kind = R::COLLECTION, id, "not found upstream");
            return Ok(None);
        };
        if record.id() != id {
            return Err(UpstreamError::MalformedBody(format!(
                "requested {} {id} but upstream returned id {}",
                R::COLLECTION,
                record.id()
            ))
            .into());
        }
        Ok(Some(record))
    }

    /// Several records in one round trip. Ids are sent as given, in order and
    /// without deduplication. Always a sequence, even for a single match;
    /// `None` when nothing matched.
    pub async fn get_many(
        &self,
        ids: &[i64],
        cancel: &CancellationToken,
    ) -> Result<Option<Vec<R>>, GatewayError> {
        validate_ids(ids)?;
        let joined = ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
        let path = format!("{}/{joined}", R::COLLECTION);
        let fetched = self.transport.fetch_json::<OneOrMany<R>>(&path, cancel).await;
        let records = absent_on_not_found(fetched)?.map(Vec::from);
        Ok(records.filter(|items| !items.is_empty()))
    }
}

fn absent_on_not_found<T>(result: Result<T, GatewayError>) -> Result<Option<T>, GatewayError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// The three catalog gateways over one shared transport.
pub struct Catalog<E> {
    characters: ResourceGateway<Character, E>,
    locations: ResourceGateway<Location, E>,
    episodes: ResourceGateway<Episode, E>,
}

impl<E> Clone for Catalog<E> {
    fn clone(&self) -> Self {
        Self {
            characters: self.characters.clone(),
            locations: self.locations.clone(),
            episodes: self.episodes.clone(),
        }
    }
}

impl<E: HttpExecutor> Catalog<E> {
    pub fn new(base_url: &str, executor: E) -> Self {
        let transport = Arc::new(Transport::new(base_url, executor));
        Self {
            characters: ResourceGateway::new(Arc::clone(&transport)),
            locations: ResourceGateway::new(Arc::clone(&transport)),
            episodes: ResourceGateway::new(transport),
        }
    }

    pub fn characters(&self) -> &ResourceGateway<Character, E> {
        &self.characters
    }

    pub fn locations(&self) -> &ResourceGateway<Location, E> {
        &self.locations
    }

    pub fn episodes(&self) -> &ResourceGateway<Episode, E> {
        &self.episodes
    }
}

impl Catalog<ReqwestExecutor> {
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ConfigError> {
        let executor = ReqwestExecutor::new(config)?;
        Ok(Self::new(&config.base_url, executor))
    }
}
