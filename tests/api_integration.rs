use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use articledb::api::{create_router, AppState};
use articledb::storage::layout::StorageLayout;
use articledb::Database;

fn setup() -> (TempDir, Router) {
    let tmp = TempDir::new().unwrap();
    let storage = StorageLayout::new(tmp.path().to_path_buf()).unwrap();
    let app = create_router(AppState {
        db: Arc::new(Database::new()),
        storage,
    });
    (tmp, app)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_create_returns_201_with_article() {
    let (_tmp, app) = setup();

    let (status, body) = send(
        &app,
        Method::POST,
        "/articles",
        Some(json!({"title": "Hello", "content": "First post", "tags": ["intro"]})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["tags"], json!(["intro"]));
    assert!(body["date"].is_string());
}

#[tokio::test]
async fn test_create_accepts_empty_body_object() {
    let (_tmp, app) = setup();

    let (status, body) = send(&app, Method::POST, "/articles", Some(json!({}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "");
    assert_eq!(body["tags"], Value::Null);
}

#[tokio::test]
async fn test_get_article_and_not_found() {
    let (_tmp, app) = setup();
    send(&app, Method::POST, "/articles", Some(json!({"title": "a", "content": "b"}))).await;

    let (status, body) = send(&app, Method::GET, "/articles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "b");

    let (status, body) = send(&app, Method::GET, "/articles/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Article not found"}));

    let (status, _) = send(&app, Method::GET, "/articles/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/articles/1abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_search_with_tag_and_sort() {
    let (_tmp, app) = setup();
    send(&app, Method::POST, "/articles", Some(json!({"title": "go", "content": "web go", "tags": ["go"]}))).await;
    send(&app, Method::POST, "/articles", Some(json!({"title": "go go", "content": "web go go", "tags": ["go"]}))).await;
    send(&app, Method::POST, "/articles", Some(json!({"title": "rust", "content": "web rust", "tags": ["rust"]}))).await;

    let (status, body) = send(&app, Method::GET, "/articles/search?keyword=web&tag=go&sortBy=relevance", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body.as_array().unwrap().iter().map(|a| a["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2]);

    let (_, body) = send(&app, Method::GET, "/articles/search?keyword=go&sortBy=relevance", None).await;
    let ids: Vec<u64> = body.as_array().unwrap().iter().map(|a| a["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![2, 1]);

    let (_, body) = send(&app, Method::GET, "/articles/search?keyword=web&sortBy=date", None).await;
    let ids: Vec<u64> = body.as_array().unwrap().iter().map(|a| a["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_search_without_keyword_is_empty() {
    let (_tmp, app) = setup();
    send(&app, Method::POST, "/articles", Some(json!({"content": "anything", "tags": ["go"]}))).await;

    let (status, body) = send(&app, Method::GET, "/articles/search?tag=go", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_load_without_save_is_404() {
    let (_tmp, app) = setup();

    let (status, body) = send(&app, Method::POST, "/load", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "No articles file found"}));
}

#[tokio::test]
async fn test_save_then_load_restores_articles() {
    let (tmp, app) = setup();
    send(&app, Method::POST, "/articles", Some(json!({"title": "keep", "content": "saved words"}))).await;

    let (status, body) = send(&app, Method::POST, "/save", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Articles saved to file"}));

    // A second server over the same directory picks the file up
    let other = create_router(AppState {
        db: Arc::new(Database::new()),
        storage: StorageLayout::new(tmp.path().to_path_buf()).unwrap(),
    });
    let (status, body) = send(&other, Method::POST, "/load", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Articles loaded from file"}));

    let (_, body) = send(&other, Method::GET, "/articles/search?keyword=saved", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "keep");
}
