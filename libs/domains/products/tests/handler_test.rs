//! Handler tests for Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! The router is backed by the in-memory repository so no database is needed.
//! `integration_test.rs` runs the same flows against PostgreSQL.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::new()))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn t_shirt() -> Value {
    json!({
        "name": "Cotton T-Shirt",
        "price": 25.99,
        "category": "T-Shirts",
        "sizes": ["S", "M"]
    })
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let response = app().oneshot(post_json("/", t_shirt())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.name, "Cotton T-Shirt");
    assert_eq!(product.price, Decimal::new(2599, 2));
    assert_eq!(product.category, "T-Shirts");
    assert_eq!(product.sizes, Some(vec!["S".to_string(), "M".to_string()]));
    assert_eq!(product.description, None);
}

#[tokio::test]
async fn test_product_lifecycle() {
    let app = app();

    let response = app.clone().oneshot(post_json("/", t_shirt())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Product = json_body(response.into_body()).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, created);

    let response = app
        .clone()
        .oneshot(delete(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app
        .oneshot(get(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_product_handler_rejects_invalid_prices() {
    let app = app();

    for price in [json!(0), json!(-10), json!(0.015), json!(-10.0), json!(25.999)] {
        let mut body = t_shirt();
        body["price"] = price.clone();

        let response = app.clone().oneshot(post_json("/", body)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "price {price}"
        );

        let error: Value = json_body(response.into_body()).await;
        assert_eq!(error["error"], "VALIDATION_ERROR");
        assert!(error["details"]["price"].is_array(), "price {price}");
    }

    // Nothing was persisted
    let response = app.oneshot(get("/")).await.unwrap();
    let products: Vec<Value> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_create_product_handler_validates_strings() {
    let app = app();

    let mut empty_name = t_shirt();
    empty_name["name"] = json!("");
    let response = app.clone().oneshot(post_json("/", empty_name)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut long_category = t_shirt();
    long_category["category"] = json!("c".repeat(101));
    let response = app
        .clone()
        .oneshot(post_json("/", long_category))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut bad_size = t_shirt();
    bad_size["sizes"] = json!(["S", ""]);
    let response = app.oneshot(post_json("/", bad_size)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_product_handler_rejects_missing_fields() {
    let response = app()
        .oneshot(post_json("/", json!({ "name": "No price" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_product_handler_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_create_product_handler_rejects_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(t_shirt().to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_list_products_returns_summaries() {
    let app = app();

    let mut body = t_shirt();
    body["description"] = json!("Soft organic cotton");
    app.clone().oneshot(post_json("/", body)).await.unwrap();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Value> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);

    let summary = products[0].as_object().unwrap();
    assert_eq!(summary.len(), 4);
    assert_eq!(summary["id"], 1);
    assert_eq!(summary["name"], "Cotton T-Shirt");
    assert_eq!(summary["price"], 25.99);
    assert_eq!(summary["category"], "T-Shirts");
    assert!(!summary.contains_key("description"));
    assert!(!summary.contains_key("sizes"));
}

#[tokio::test]
async fn test_list_products_filters_by_category() {
    let app = app();

    for (name, category) in [
        ("Cotton T-Shirt", "T-Shirts"),
        ("Denim Jeans", "Jeans"),
        ("V-Neck", "T-Shirts"),
    ] {
        let mut body = t_shirt();
        body["name"] = json!(name);
        body["category"] = json!(category);
        app.clone().oneshot(post_json("/", body)).await.unwrap();
    }

    let response = app.clone().oneshot(get("/?category=T-Shirts")).await.unwrap();
    let products: Vec<ProductSummary> = json_body(response.into_body()).await;
    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);

    // Exact, case-sensitive match
    let response = app.clone().oneshot(get("/?category=t-shirts")).await.unwrap();
    let products: Vec<ProductSummary> = json_body(response.into_body()).await;
    assert!(products.is_empty());

    // Empty category means no filter
    let response = app.oneshot(get("/?category=")).await.unwrap();
    let products: Vec<ProductSummary> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_list_products_rejects_repeated_category_with_error_body() {
    let response = app()
        .oneshot(get("/?category=Pants&category=Shoes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "BAD_REQUEST");
    assert_eq!(error["code"], 1006);
}

#[tokio::test]
async fn test_get_product_handler_returns_404_for_unknown_id() {
    let response = app().oneshot(get("/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "NOT_FOUND");
    assert_eq!(error["message"], "Product not found");
}

#[tokio::test]
async fn test_get_product_handler_rejects_non_integer_id() {
    let response = app().oneshot(get("/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_delete_product_handler_returns_404_for_unknown_id() {
    let response = app().oneshot(delete("/42")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_handler_rejects_non_integer_id() {
    let response = app().oneshot(delete("/1.5")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_storage_failure_returns_opaque_500() {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection refused (os error 111)".to_string(),
        ))])
        .into_connection();
    let app = handlers::router(ProductService::new(PgProductRepository::new(db)));

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "INTERNAL_ERROR");
    assert_eq!(error["message"], "An internal server error occurred");
    assert!(!error.to_string().contains("refused"));
}
