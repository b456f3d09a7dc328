//! Handler tests for the Items domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! The real service runs against the in-memory repository, so the full
//! handler → service → store path is exercised without a database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn test_app() -> (Router, ItemService<InMemoryItemRepository>) {
    let repository = InMemoryItemRepository::new();
    let service = ItemService::new(repository);
    (handlers::router(service.clone()), service)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_item_returns_201_and_round_trips() {
    let (app, _service) = test_app();
    let builder = TestDataBuilder::from_test_name("handler_create_201");
    let name = builder.name("item", "main");

    let response = app
        .clone()
        .oneshot(post_json(
            "/",
            json!({"name": name.clone(), "description": "Handler test", "price": 9.99}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Item = json_body(response.into_body()).await;
    assert_eq!(created.name, name);
    assert_eq!(created.description, "Handler test");
    assert_eq!(created.price, 9.99);

    // The created record is readable under its assigned id
    let response = app.oneshot(get(&format!("/{}", created.id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Item = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_item_description_defaults_to_empty() {
    let (app, _service) = test_app();

    let response = app
        .oneshot(post_json("/", json!({"name": "bare", "price": 1.0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Item = json_body(response.into_body()).await;
    assert_eq!(created.description, "");
}

#[tokio::test]
async fn test_create_duplicate_name_returns_409() {
    let (app, _service) = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/", json!({"name": "Widget", "price": 5.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same name under case folding is a conflict
    let response = app
        .oneshot(post_json("/", json!({"name": "wIDGET", "price": 7.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_create_item_validates_input() {
    let (app, _service) = test_app();

    // Empty name
    let response = app
        .clone()
        .oneshot(post_json("/", json!({"name": "", "price": 1.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Zero price
    let response = app
        .clone()
        .oneshot(post_json("/", json!({"name": "free", "price": 0.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Negative price
    let response = app
        .clone()
        .oneshot(post_json("/", json!({"name": "owed", "price": -3.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Name one character over the limit
    let response = app
        .oneshot(post_json("/", json!({"name": "x".repeat(201), "price": 1.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_item_returns_404_for_missing() {
    let (app, _service) = test_app();

    let response = app.oneshot(get("/12345")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_item_rejects_non_numeric_id() {
    let (app, _service) = test_app();

    let response = app.oneshot(get("/not-a-number")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_list_items_returns_all() {
    let (app, service) = test_app();

    for (name, price) in [("alpha", 1.0), ("beta", 2.0), ("gamma", 3.0)] {
        service
            .create_item(CreateItem {
                name: name.to_string(),
                description: String::new(),
                price,
            })
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn test_search_matches_name_substring_case_insensitively() {
    let (app, service) = test_app();

    for (name, price) in [("Blue Widget", 1.0), ("red widget", 2.0), ("Gadget", 3.0)] {
        service
            .create_item(CreateItem {
                name: name.to_string(),
                description: String::new(),
                price,
            })
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/search?q=WIDGET")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<Item> = json_body(response.into_body()).await;
    let mut names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    names.sort();
    assert_eq!(names, ["Blue Widget", "red widget"]);
}

#[tokio::test]
async fn test_update_item_replaces_all_fields() {
    let (app, service) = test_app();

    let created = service
        .create_item(CreateItem {
            name: "before".to_string(),
            description: "old".to_string(),
            price: 1.0,
        })
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/{}", created.id),
            json!({"name": "after", "description": "new", "price": 2.5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Item = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "after");
    assert_eq!(updated.description, "new");
    assert_eq!(updated.price, 2.5);
}

#[tokio::test]
async fn test_update_missing_item_returns_404() {
    let (app, _service) = test_app();

    let response = app
        .oneshot(put_json(
            "/999",
            json!({"name": "ghost", "description": "", "price": 1.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_to_duplicate_name_returns_409() {
    let (app, service) = test_app();

    service
        .create_item(CreateItem {
            name: "alpha".to_string(),
            description: String::new(),
            price: 1.0,
        })
        .await
        .unwrap();
    let beta = service
        .create_item(CreateItem {
            name: "beta".to_string(),
            description: String::new(),
            price: 2.0,
        })
        .await
        .unwrap();

    // Renaming beta to Alpha collides with the existing item
    let response = app
        .oneshot(put_json(
            &format!("/{}", beta.id),
            json!({"name": "Alpha", "description": "", "price": 2.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_item_then_delete_again() {
    let (app, service) = test_app();

    let created = service
        .create_item(CreateItem {
            name: "ephemeral".to_string(),
            description: String::new(),
            price: 1.0,
        })
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(delete(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Second delete finds nothing
    let response = app
        .oneshot(delete(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bulk_discount_updates_items_above_threshold() {
    let (app, service) = test_app();

    let mut ids = Vec::new();
    for (name, price) in [("cheap", 5.0), ("mid", 15.0), ("dear", 25.0)] {
        let item = service
            .create_item(CreateItem {
                name: name.to_string(),
                description: String::new(),
                price,
            })
            .await
            .unwrap();
        ids.push(item.id);
    }

    let response = app
        .clone()
        .oneshot(post_json(
            "/discount",
            json!({"threshold_price": 10.0, "discount_percent": 20.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let result: DiscountApplied = json_body(response.into_body()).await;
    assert_eq!(result.updated, 2);

    // Items above the threshold were discounted and rounded to cents
    let cheap = service.get_item(ids[0]).await.unwrap().unwrap();
    let mid = service.get_item(ids[1]).await.unwrap().unwrap();
    let dear = service.get_item(ids[2]).await.unwrap().unwrap();
    assert_eq!(cheap.price, 5.0);
    assert_eq!(mid.price, 12.0);
    assert_eq!(dear.price, 20.0);
}

#[tokio::test]
async fn test_bulk_discount_rejects_percent_over_100() {
    let (app, _service) = test_app();

    let response = app
        .oneshot(post_json(
            "/discount",
            json!({"threshold_price": 10.0, "discount_percent": 150.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
