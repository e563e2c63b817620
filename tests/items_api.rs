use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use static_json_api::api::{self, AppState};
use static_json_api::store::{Item, ItemStore};
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(items: Value) -> Router {
    let items: Vec<Item> = serde_json::from_value(items).unwrap();
    api::items_app(AppState {
        items: Arc::new(ItemStore::new(items)),
    })
}

fn app() -> Router {
    app_with(json!([
        {"id": 1, "title": "Focus", "text": "deep work", "tags": ["focus"]},
        {"id": 2, "title": "Rest", "text": "sleep", "category": "health"},
        {"id": 3, "title": "Walk", "text": "after lunch", "category": "health"},
        {"id": 4, "title": "Notes", "text": "write it down"}
    ]))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn ids(body: &Value) -> Vec<i64> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|it| it["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, body) = get_json(app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn home_page_is_html() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn list_defaults_to_whole_collection() {
    let (status, body) = get_json(app(), "/api/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
    assert_eq!(body["limit"], 4);
    assert_eq!(body["offset"], 0);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn list_slices_with_limit_and_offset() {
    let (_, body) = get_json(app(), "/api/items?limit=2&offset=1").await;
    assert_eq!(body["count"], 4);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["offset"], 1);
    assert_eq!(ids(&body), vec![2, 3]);
}

#[tokio::test]
async fn list_clips_slices_past_the_end() {
    let (_, body) = get_json(app(), "/api/items?limit=10&offset=3").await;
    assert_eq!(ids(&body), vec![4]);
    assert_eq!(body["count"], 4);

    let (_, body) = get_json(app(), "/api/items?offset=100").await;
    assert!(ids(&body).is_empty());
    assert_eq!(body["count"], 4);
}

#[tokio::test]
async fn list_treats_zero_limit_as_absent() {
    let (_, body) = get_json(app(), "/api/items?limit=0").await;
    assert_eq!(body["limit"], 4);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn list_treats_invalid_params_as_absent() {
    let (status, body) = get_json(app(), "/api/items?limit=abc&offset=xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 4);
    assert_eq!(body["offset"], 0);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn random_returns_distinct_items() {
    let (status, body) = get_json(app(), "/api/random?n=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["n"], 4);

    let drawn = ids(&body);
    let unique: HashSet<_> = drawn.iter().collect();
    assert_eq!(drawn.len(), 4);
    assert_eq!(unique.len(), 4);

    for item in body["items"].as_array().unwrap() {
        for key in ["id", "title", "text"] {
            assert!(item.get(key).is_some(), "missing {key}");
        }
    }
}

#[tokio::test]
async fn random_defaults_to_one() {
    let (_, body) = get_json(app(), "/api/random").await;
    assert_eq!(body["n"], 1);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn random_clamps_n_to_bounds() {
    let (_, body) = get_json(app(), "/api/random?n=99").await;
    assert_eq!(body["n"], 4);
    assert_eq!(body["items"].as_array().unwrap().len(), 4);

    let (_, body) = get_json(app(), "/api/random?n=0").await;
    assert_eq!(body["n"], 1);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn random_on_empty_collection_returns_nothing() {
    let (status, body) = get_json(app_with(json!([])), "/api/random?n=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["n"], 0);
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn categories_counts_sum_to_total() {
    let (status, body) = get_json(app(), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);

    let categories = body["categories"].as_object().unwrap();
    assert_eq!(categories["health"], 2);
    assert_eq!(categories["uncategorized"], 2);

    let sum: u64 = categories.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(sum, 4);
}

#[tokio::test]
async fn search_empty_query_returns_nothing() {
    let (status, body) = get_json(app(), "/api/search?q=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "");
    assert!(ids(&body).is_empty());
    assert!(body.get("count").is_none());

    let (_, body) = get_json(app(), "/api/search?q=%20%20").await;
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn search_matches_title_text_and_tags() {
    let app = app_with(json!([
        {"id": 1, "title": "Focus", "text": "deep work", "tags": ["focus"]},
        {"id": 2, "title": "Rest", "text": "sleep", "tags": []}
    ]));

    let (_, body) = get_json(app.clone(), "/api/search?q=focus").await;
    assert_eq!(ids(&body), vec![1]);
    assert_eq!(body["count"], 1);
    assert_eq!(body["query"], "focus");

    // both items contain an "e"
    let (_, body) = get_json(app, "/api/search?q=e").await;
    assert_eq!(ids(&body), vec![1, 2]);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn search_is_case_insensitive_and_preserves_order() {
    let (_, body) = get_json(app(), "/api/search?q=FOCUS").await;
    assert_eq!(ids(&body), vec![1]);

    let (_, first) = get_json(app(), "/api/search?q=e").await;
    let (_, second) = get_json(app(), "/api/search?q=e").await;
    assert_eq!(ids(&first), vec![1, 2, 3, 4]);
    assert_eq!(first, second);
}
