//! Stand-in for the upstream catalog API.
//!
//! Serves fixed fixtures with the upstream's paging, filtering and error
//! conventions, including the batch endpoint answering a single id with a
//! bare object instead of an array.

pub mod fixtures;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header::HOST, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    /// Case-insensitive substring.
    Contains,
    /// Case-insensitive equality.
    Equals,
}

struct Collection {
    records: Vec<Value>,
    not_found: &'static str,
    /// Filterable fields, in the order they are echoed in page links.
    params: &'static [(&'static str, Match)],
}

impl Collection {
    fn matches(&self, record: &Value, query: &HashMap<String, String>) -> bool {
        self.params.iter().all(|(key, how)| {
            let Some(wanted) = query.get(*key).filter(|v| !v.is_empty()) else {
                return true;
            };
            let actual = record[*key].as_str().unwrap_or_default().to_lowercase();
            let wanted = wanted.to_lowercase();
            match how {
                Match::Contains => actual.contains(&wanted),
                Match::Equals => actual == wanted,
            }
        })
    }
}

pub struct MockCatalog {
    collections: HashMap<&'static str, Collection>,
    page_size: usize,
}

impl MockCatalog {
    pub fn new(page_size: usize) -> Self {
        let mut collections = HashMap::new();
        collections.insert(
            "character",
            Collection {
                records: fixtures::characters(),
                not_found: "Character not found",
                params: &[
                    ("name", Match::Contains),
                    ("status", Match::Equals),
                    ("species", Match::Contains),
                    ("type", Match::Contains),
                    ("gender", Match::Equals),
                ],
            },
        );
        collections.insert(
            "location",
            Collection {
                records: fixtures::locations(),
                not_found: "Location not found",
                params: &[
                    ("name", Match::Contains),
                    ("type", Match::Contains),
                    ("dimension", Match::Contains),
                ],
            },
        );
        collections.insert(
            "episode",
            Collection {
                records: fixtures::episodes(),
                not_found: "Episode not found",
                params: &[("name", Match::Contains), ("episode", Match::Contains)],
            },
        );
        Self {
            collections,
            page_size: page_size.max(1),
        }
    }

    fn collection(&self, name: &str) -> Result<&Collection, ApiError> {
        self.collections.get(name).ok_or_else(nothing_here)
    }
}

pub type Db = Arc<MockCatalog>;

type ApiError = (StatusCode, Json<Value>);

pub fn app() -> Router {
    app_with_page_size(DEFAULT_PAGE_SIZE)
}

pub fn app_with_page_size(page_size: usize) -> Router {
    let db: Db = Arc::new(MockCatalog::new(page_size));
    Router::new()
        .route("/{collection}", get(list_records))
        .route("/{collection}/{ids}", get(get_records))
        .with_state(db)
}

pub async fn run(listener: TcpListener, page_size: usize) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_page_size(page_size)).await
}

fn nothing_here() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "There is nothing here" })),
    )
}

async fn list_records(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let col = db.collection(&collection)?;
    let matches: Vec<&Value> = col.records.iter().filter(|r| col.matches(r, &query)).collect();

    let count = matches.len();
    let pages = count.div_ceil(db.page_size);
    let page = query
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);
    if count == 0 || page > pages {
        return Err(nothing_here());
    }

    let results: Vec<Value> = matches
        .into_iter()
        .skip((page - 1) * db.page_size)
        .take(db.page_size)
        .cloned()
        .collect();

    let host = headers
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let link = |target: usize| page_link(host, &collection, col, &query, target);

    Ok(Json(json!({
        "info": {
            "count": count,
            "pages": pages,
            "next": (page < pages).then(|| link(page + 1)),
            "prev": (page > 1).then(|| link(page - 1)),
        },
        "results": results,
    })))
}

fn page_link(
    host: &str,
    collection: &str,
    col: &Collection,
    query: &HashMap<String, String>,
    page: usize,
) -> String {
    let mut link = format!("http://{host}/{collection}?page={page}");
    for (key, _) in col.params {
        if let Some(value) = query.get(*key).filter(|v| !v.is_empty()) {
            link.push_str(&format!("&{key}={}", urlencoding::encode(value)));
        }
    }
    link
}

async fn get_records(
    State(db): State<Db>,
    Path((collection, ids)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let col = db.collection(&collection)?;
    let parsed: Vec<i64> = ids
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| bad_id())?;
    if parsed.is_empty() {
        return Err(bad_id());
    }

    let find = |id: i64| col.records.iter().find(|r| r["id"].as_i64() == Some(id));

    if !ids.contains(',') {
        return find(parsed[0])
            .cloned()
            .map(Json)
            .ok_or((StatusCode::NOT_FOUND, Json(json!({ "error": col.not_found }))));
    }

    let found: Vec<Value> = parsed.into_iter().filter_map(find).cloned().collect();
    Ok(Json(Value::Array(found)))
}

fn bad_id() -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Hey! you must provide an id" })),
    )
}
