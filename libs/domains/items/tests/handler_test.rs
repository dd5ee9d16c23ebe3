//! Handler tests for the Items domain
//!
//! These tests verify the HTTP contract of the items router:
//! - Request deserialization and validation failures (422)
//! - Response serialization, including the timestamp format
//! - Status codes for duplicates (409) and missing items (404)
//!
//! Only the items router is mounted here; documentation, health and
//! middleware are covered by the app crate.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::ErrorResponse;
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDatabase;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn app(db: &TestDatabase) -> Router {
    schema::create_tables(&db.connection).await.unwrap();
    let repo = SqliteItemRepository::new(db.connection());
    handlers::router(ItemService::new(repo))
}

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_item_handler_returns_201() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;

    let request = post_json(
        json!({"name": "Sample Item", "description": "This is a sample item"}).to_string(),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Sample Item");
    assert_eq!(body["description"], "This is a sample item");

    // ISO-8601, six fractional digits, UTC designator
    let created_at = body["created_at"].as_str().unwrap();
    assert_eq!(created_at.len(), "2024-05-01T12:00:00.123456Z".len());
    assert!(created_at.ends_with('Z'));
}

#[tokio::test]
async fn test_create_item_without_description_returns_null() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;

    let response = app
        .oneshot(post_json(json!({"name": "Bare"}).to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn test_create_item_handler_validates_input() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;

    let cases = [
        (json!({"name": ""}), "name"),
        (json!({"name": "   "}), "name"),
        (json!({"name": "a".repeat(101)}), "name"),
        (json!({"name": "ok", "description": "d".repeat(1001)}), "description"),
    ];

    for (payload, field) in cases {
        let response = app
            .clone()
            .oneshot(post_json(payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.error, "VALIDATION_ERROR");
        assert_eq!(body.details.unwrap()["field"], field);
    }
}

#[tokio::test]
async fn test_create_item_malformed_json() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;

    for raw in [r#"{"name": "#, r#"{"description": "no name"}"#, r#"{"name": 42}"#] {
        let response = app.clone().oneshot(post_json(raw.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "body {}", raw);
    }
}

#[tokio::test]
async fn test_create_duplicate_returns_409() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;

    let payload = json!({"name": "Sample Item"}).to_string();

    let first = app.clone().oneshot(post_json(payload.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(post_json(payload)).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body: ErrorResponse = json_body(second.into_body()).await;
    assert_eq!(body.error, "CONFLICT");
    assert!(body.message.contains("Sample Item"));
}

#[tokio::test]
async fn test_get_item_handler_returns_404() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;

    let response = app.oneshot(get("/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Item with ID 9999 not found");
}

#[tokio::test]
async fn test_get_item_invalid_id_returns_422() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;

    for uri in ["/abc", "/0", "/-3"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "uri {}", uri);
    }
}

#[tokio::test]
async fn test_list_items_empty() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let items: Value = json_body(response.into_body()).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn test_closed_pool_returns_500_without_driver_text() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;
    db.connection().close().await.unwrap();

    let response = app
        .oneshot(post_json(json!({"name": "Late Item"}).to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.code, 2014);
    assert_eq!(body.error, "DATABASE_POOL_CLOSED");
    assert!(!body.message.to_lowercase().contains("sqlx"));
}

#[tokio::test]
async fn test_end_to_end_flow() {
    let db = TestDatabase::new().await;
    let app = app(&db).await;

    let sample = app
        .clone()
        .oneshot(post_json(
            json!({"name": "Sample Item", "description": "This is a sample item"}).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(sample.status(), StatusCode::CREATED);
    let sample: Value = json_body(sample.into_body()).await;
    assert_eq!(sample["id"], 1);

    let another = app
        .clone()
        .oneshot(post_json(json!({"name": "Another Item"}).to_string()))
        .await
        .unwrap();
    let another: Value = json_body(another.into_body()).await;
    assert_eq!(another["id"], 2);

    let list = app.clone().oneshot(get("/")).await.unwrap();
    let items: Value = json_body(list.into_body()).await;
    assert_eq!(items, json!([sample.clone(), another]));

    let fetched = app.clone().oneshot(get("/1")).await.unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched: Value = json_body(fetched.into_body()).await;
    assert_eq!(fetched, sample);

    let duplicate = app
        .clone()
        .oneshot(post_json(json!({"name": "Sample Item"}).to_string()))
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let missing = app.oneshot(get("/9999")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
