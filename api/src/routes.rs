//! `/api/v1` routes for characters, locations and episodes.
//!
//! Handlers are generic over the resource kind; each kind contributes its
//! route segment, its gateway accessor and the wording of its 404s.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use catalog_core::{
    Catalog, Character, Episode, Location, Page, ReqwestExecutor, Resource, ResourceGateway,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// A resource kind exposed under `/api/v1/{ROUTE}`.
pub trait Routed: Resource + Serialize {
    /// Plural route segment, also used in 404 messages.
    const ROUTE: &'static str;

    fn gateway(catalog: &Catalog<ReqwestExecutor>) -> &ResourceGateway<Self, ReqwestExecutor>;
}

impl Routed for Character {
    const ROUTE: &'static str = "characters";

    fn gateway(catalog: &Catalog<ReqwestExecutor>) -> &ResourceGateway<Self, ReqwestExecutor> {
        catalog.characters()
    }
}

impl Routed for Location {
    const ROUTE: &'static str = "locations";

    fn gateway(catalog: &Catalog<ReqwestExecutor>) -> &ResourceGateway<Self, ReqwestExecutor> {
        catalog.locations()
    }
}

impl Routed for Episode {
    const ROUTE: &'static str = "episodes";

    fn gateway(catalog: &Catalog<ReqwestExecutor>) -> &ResourceGateway<Self, ReqwestExecutor> {
        catalog.episodes()
    }
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Character>())
        .merge(resource_routes::<Location>())
        .merge(resource_routes::<Episode>())
}

fn resource_routes<R>() -> Router<AppState>
where
    R: Routed,
    R::Filter: DeserializeOwned,
{
    Router::new()
        .route(&format!("/{}", R::ROUTE), get(list::<R>))
        .route(&format!("/{}/multiple", R::ROUTE), get(get_many::<R>))
        .route(&format!("/{}/{{id}}", R::ROUTE), get(get_by_id::<R>))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list<R>(
    State(state): State<AppState>,
    Query(filter): Query<R::Filter>,
) -> Result<Json<Page<R>>, ApiError>
where
    R: Routed,
    R::Filter: DeserializeOwned,
{
    let cancel = state.request_token();
    R::gateway(&state.catalog)
        .list(Some(&filter), &cancel)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no {} found", R::ROUTE)))
}

async fn get_by_id<R: Routed>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<R>, ApiError> {
    let cancel = state.request_token();
    R::gateway(&state.catalog)
        .get_by_id(id, &cancel)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("{} with id {id} not found", R::COLLECTION)))
}

#[derive(Debug, Deserialize)]
pub struct IdsQuery {
    pub ids: Option<String>,
}

/// Parse `1, 2,,3` into ids. Blank entries are skipped; anything else that
/// is not an integer rejects the whole list.
pub fn parse_ids(raw: &str) -> Result<Vec<i64>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| ApiError::BadRequest(format!("invalid id: {s}")))
        })
        .collect()
}

async fn get_many<R: Routed>(
    State(state): State<AppState>,
    Query(query): Query<IdsQuery>,
) -> Result<Json<Vec<R>>, ApiError> {
    let ids = parse_ids(query.ids.as_deref().unwrap_or_default())?;
    if ids.is_empty() {
        return Err(ApiError::BadRequest("at least one id is required".to_string()));
    }

    let cancel = state.request_token();
    R::gateway(&state.catalog)
        .get_many(&ids, &cancel)
        .await?
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!("no {} found for the given ids", R::ROUTE))
        })
}
