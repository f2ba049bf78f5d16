use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_page_size};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header("host", "upstream.test")
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_characters_first_page() {
    let resp = app().oneshot(get("/character")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["info"]["count"], 8);
    assert_eq!(body["info"]["pages"], 1);
    assert!(body["info"]["next"].is_null());
    assert!(body["info"]["prev"].is_null());
    assert_eq!(body["results"][0]["name"], "Rick Sanchez");
}

#[tokio::test]
async fn list_filters_are_combined() {
    let resp = app()
        .oneshot(get("/character?name=smith&gender=female"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Summer Smith", "Beth Smith"]);
}

#[tokio::test]
async fn list_status_is_exact_match() {
    let resp = app().oneshot(get("/character?status=dead")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["info"]["count"], 1);
    assert_eq!(body["results"][0]["name"], "Adjudicator Rick");
}

#[tokio::test]
async fn list_without_matches_returns_404() {
    let resp = app().oneshot(get("/location?name=nowhere")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "There is nothing here");
}

#[tokio::test]
async fn list_pagination_links() {
    let app = app_with_page_size(2);

    let resp = app.clone().oneshot(get("/character?page=2&name=s")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["info"]["count"], 6);
    assert_eq!(body["info"]["pages"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["info"]["next"],
        "http://upstream.test/character?page=3&name=s"
    );
    assert_eq!(
        body["info"]["prev"],
        "http://upstream.test/character?page=1&name=s"
    );

    let resp = app.oneshot(get("/character?page=4&name=s")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_episodes_by_code_prefix() {
    let resp = app().oneshot(get("/episode?episode=S01")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["info"]["count"], 3);
}

#[tokio::test]
async fn unknown_collection_returns_404() {
    let resp = app().oneshot(get("/planet")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- single ---

#[tokio::test]
async fn get_single_returns_bare_object() {
    let resp = app().oneshot(get("/location/3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body.is_object());
    assert_eq!(body["name"], "Citadel of Ricks");
    assert_eq!(body["type"], "Space station");
}

#[tokio::test]
async fn get_single_not_found() {
    let resp = app().oneshot(get("/character/999999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Character not found");
}

#[tokio::test]
async fn get_bad_id_returns_400() {
    let resp = app().oneshot(get("/episode/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- batch ---

#[tokio::test]
async fn batch_returns_array_in_request_order() {
    let resp = app().oneshot(get("/episode/28,1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [28, 1]);
}

#[tokio::test]
async fn batch_skips_unknown_ids() {
    let resp = app().oneshot(get("/character/1,999")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let resp = app().oneshot(get("/character/998,999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());
}
