//! Route-level tests: the API router in front of a live mock upstream.

use std::time::Duration;

use axum::http::{Request, StatusCode};
use axum::Router;
use catalog_api::{app, ApiConfig, AppState};
use catalog_core::{CancellationToken, Catalog, UpstreamConfig};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener, mock_server::DEFAULT_PAGE_SIZE));
    format!("http://{addr}")
}

fn router_for(base_url: String, shutdown: CancellationToken) -> Router {
    let config = ApiConfig::from_lookup(|_| None).unwrap();
    let upstream = UpstreamConfig {
        base_url,
        timeout: Duration::from_secs(5),
        client_name: "catalog-api-tests".to_string(),
    };
    let catalog = Catalog::from_config(&upstream).unwrap();
    app(AppState::new(catalog, shutdown), &config)
}

async fn router() -> Router {
    router_for(spawn_upstream().await, CancellationToken::new())
}

async fn call(router: Router, uri: &str) -> (StatusCode, Value) {
    let resp = router
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health() {
    let (status, body) = call(router().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// --- list ---

#[tokio::test]
async fn list_characters_with_filters() {
    let (status, body) = call(router().await, "/api/v1/characters?species=alien&status=Alive").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["count"], 1);
    assert_eq!(body["results"][0]["name"], "Abadango Cluster Princess");
}

#[tokio::test]
async fn list_ignores_non_positive_page() {
    let (status, body) = call(router().await, "/api/v1/episodes?page=-5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["count"], 4);
}

#[tokio::test]
async fn list_without_matches_is_404() {
    let (status, body) = call(router().await, "/api/v1/locations?type=Asteroid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no locations found");
}

#[tokio::test]
async fn list_with_unparsable_page_is_400() {
    let (status, _) = call(router().await, "/api/v1/characters?page=two").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// --- by id ---

#[tokio::test]
async fn get_episode_by_id() {
    let (status, body) = call(router().await, "/api/v1/episodes/28").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["episode"], "S03E07");
    assert_eq!(body["air_date"], "September 10, 2017");
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let (status, body) = call(router().await, "/api/v1/characters/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "character with id 999999 not found");
}

#[tokio::test]
async fn get_non_positive_id_is_400() {
    let (status, _) = call(router().await, "/api/v1/locations/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_non_numeric_id_is_400() {
    let (status, _) = call(router().await, "/api/v1/locations/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// --- multiple ---

#[tokio::test]
async fn multiple_returns_array() {
    let (status, body) = call(router().await, "/api/v1/characters/multiple?ids=3,%201").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [3, 1]);
}

#[tokio::test]
async fn multiple_with_one_id_is_still_an_array() {
    let (status, body) = call(router().await, "/api/v1/locations/multiple?ids=20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["dimension"], "Replacement Dimension");
}

#[tokio::test]
async fn multiple_rejects_bad_input() {
    for uri in [
        "/api/v1/episodes/multiple",
        "/api/v1/episodes/multiple?ids=",
        "/api/v1/episodes/multiple?ids=1,x",
        "/api/v1/episodes/multiple?ids=1,-1",
    ] {
        let (status, _) = call(router().await, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn multiple_without_matches_is_404() {
    let (status, _) = call(router().await, "/api/v1/episodes/multiple?ids=998,999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- failures ---

#[tokio::test]
async fn shutdown_in_progress_is_503() {
    let shutdown = CancellationToken::new();
    let router = router_for(spawn_upstream().await, shutdown.clone());
    shutdown.cancel();

    let (status, _) = call(router, "/api/v1/characters/1").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unreachable_upstream_is_500() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let router = router_for(format!("http://{addr}"), CancellationToken::new());
    let (status, body) = call(router, "/api/v1/episodes").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let resp = router()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://localhost:4200")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
