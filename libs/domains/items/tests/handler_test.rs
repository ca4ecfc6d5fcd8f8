//! Handler tests for the Items domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses in the `{"detail": ...}` wire format
//!
//! Unlike E2E tests, these test ONLY the items domain handlers,
//! not the full application with docs routes, middleware, etc.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Each test gets its own repository instance, so state never leaks between tests
fn app() -> Router {
    let repository = InMemoryItemRepository::new();
    let service = ItemService::new(repository);
    handlers::router(service)
}

fn post_item(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_item_handler_returns_201() {
    let app = app();

    let request = post_item(json!({
        "name": "My Awesome Gadget",
        "description": "The best gadget ever.",
        "price": 49.99,
        "tags": ["electronics", "cool"]
    }));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["item_id"], 1);
    assert_eq!(body["message"], "Item created successfully");
    assert_eq!(body["item"]["name"], "My Awesome Gadget");
    assert_eq!(body["item"]["tags"], json!(["electronics", "cool"]));
}

#[tokio::test]
async fn test_create_item_handler_rejects_duplicate_name() {
    let app = app();

    let first = app
        .clone()
        .oneshot(post_item(json!({
            "name": "My Awesome Gadget",
            "description": "The best gadget ever.",
            "price": 49.99,
            "tags": ["electronics", "cool"]
        })))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // Same name, different other fields
    let response = app
        .oneshot(post_item(json!({
            "name": "My Awesome Gadget",
            "description": "Second instance, should fail",
            "price": 99.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["detail"],
        "Item with name 'My Awesome Gadget' already exists"
    );
}

#[tokio::test]
async fn test_create_item_handler_validates_input() {
    let app = app();

    // Invalid name (empty string)
    let response = app
        .clone()
        .oneshot(post_item(json!({"name": "", "price": 1.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Invalid price (negative)
    let response = app
        .oneshot(post_item(json!({"name": "Widget", "price": -1.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_item_handler_defaults_optional_fields() {
    let app = app();

    let response = app
        .oneshot(post_item(json!({"name": "Bare Item", "price": 1.0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["item"]["description"], json!(null));
    assert_eq!(body["item"]["tags"], json!([]));
}

#[tokio::test]
async fn test_list_items_handler_empty() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"items": [], "count": 0}));
}

#[tokio::test]
async fn test_list_items_handler_returns_creation_order_without_ids() {
    let app = app();

    for (name, price) in [("Item A", 1.0), ("Item B", 2.0)] {
        let response = app
            .clone()
            .oneshot(post_item(json!({"name": name, "price": price})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["items"][0]["name"], "Item A");
    assert_eq!(body["items"][1]["name"], "Item B");
    // The listing exposes only business fields, never the identifier
    assert!(body["items"][0].get("item_id").is_none());
}

#[tokio::test]
async fn test_get_item_handler_returns_200_without_id() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_item(json!({
            "name": "Specific Item Test",
            "description": "Details for specific item",
            "price": 12.34,
            "tags": ["specific"]
        })))
        .await
        .unwrap();
    let created_body = json_body(created.into_body()).await;
    let item_id = created_body["item_id"].as_u64().unwrap();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", item_id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Specific Item Test");
    assert_eq!(body["price"], 12.34);
    assert!(body.get("item_id").is_none());
}

#[tokio::test]
async fn test_get_item_handler_returns_404_for_missing() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Item not found");
}
