//! Handler tests for the Products domain
//!
//! These drive the product router with an in-memory repository and check
//! status codes, envelopes and validation output. They do not include the
//! application shell (docs, CORS, fallback).

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, name: &str, price: f64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/",
        Some(json!({"name": name, "price": price})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

#[tokio::test]
async fn test_create_product_returns_201() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({"name": "Curved Monitor", "price": 300})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"data": {"id": 1, "name": "Curved Monitor", "price": 300.0, "availability": true}})
    );
}

#[tokio::test]
async fn test_create_with_empty_body_lists_every_error() {
    let app = app();

    let (status, body) = send(&app, "POST", "/", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let messages: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["msg"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Name is required",
            "Price must be a number",
            "Price must be greater than 0",
            "Price is required"
        ]
    );
}

#[tokio::test]
async fn test_create_with_empty_name_is_rejected() {
    let app = app();

    let (status, body) = send(&app, "POST", "/", Some(json!({"name": "", "price": 10}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["path"], "name");
    assert_eq!(body["errors"][0]["value"], "");
}

#[tokio::test]
async fn test_create_with_non_positive_price_is_rejected() {
    let app = app();

    for price in [json!(0), json!(-4.5), json!("0")] {
        let (status, body) =
            send(&app, "POST", "/", Some(json!({"name": "Desk", "price": price}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["msg"], "Price must be greater than 0");
    }
}

#[tokio::test]
async fn test_create_with_invalid_availability_lists_field_error() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({"name": "Desk", "price": 5, "availability": "maybe"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"errors": [{
            "type": "field",
            "value": "maybe",
            "msg": "Invalid availability value",
            "path": "availability",
            "location": "body"
        }]})
    );
}

#[tokio::test]
async fn test_create_with_invalid_json_body() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"error": "Invalid JSON body"}));
}

#[tokio::test]
async fn test_get_missing_product_is_404() {
    let app = app();

    let (status, body) = send(&app, "GET", "/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[tokio::test]
async fn test_get_non_integer_id_is_400() {
    let app = app();

    let (status, body) = send(&app, "GET", "/1.5", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"errors": [{
            "type": "field",
            "value": "1.5",
            "msg": "Invalid ID",
            "path": "id",
            "location": "params"
        }]})
    );
}

#[tokio::test]
async fn test_undecodable_id_is_field_error() {
    let app = app();

    let (status, body) = send(&app, "GET", "/%FF", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"errors": [{
            "type": "field",
            "msg": "Invalid ID",
            "path": "id",
            "location": "params"
        }]})
    );
}

#[tokio::test]
async fn test_list_sorted_by_price_descending() {
    let app = app();
    create(&app, "Mouse", 20.0).await;
    create(&app, "Monitor", 300.0).await;
    create(&app, "Keyboard", 49.9).await;

    let (status, body) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Monitor", "Keyboard", "Mouse"]);
}

#[tokio::test]
async fn test_update_replaces_every_field() {
    let app = app();
    let product = create(&app, "Chair", 80.0).await;
    let uri = format!("/{}", product["id"]);

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"name": "Office Chair", "price": "95.5", "availability": "false"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Office Chair");
    assert_eq!(body["data"]["price"], 95.5);
    assert_eq!(body["data"]["availability"], false);
}

#[tokio::test]
async fn test_update_requires_availability() {
    let app = app();
    let product = create(&app, "Chair", 80.0).await;
    let uri = format!("/{}", product["id"]);

    let (status, body) = send(&app, "PUT", &uri, Some(json!({"name": "Chair", "price": 90}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["msg"], "Invalid availability value");
}

#[tokio::test]
async fn test_update_missing_product_is_404() {
    let app = app();

    let (status, _) = send(
        &app,
        "PUT",
        "/8",
        Some(json!({"name": "Chair", "price": 90, "availability": true})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_pair_restores_availability() {
    let app = app();
    let product = create(&app, "Lamp", 15.0).await;
    assert_eq!(product["availability"], true);
    let uri = format!("/{}", product["id"]);

    let (status, body) = send(&app, "PATCH", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["availability"], false);

    let (status, body) = send(&app, "PATCH", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["availability"], true);
}

#[tokio::test]
async fn test_toggle_missing_product_is_404() {
    let app = app();

    let (status, body) = send(&app, "PATCH", "/3", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = app();
    let product = create(&app, "Desk", 150.0).await;
    let uri = format!("/{}", product["id"]);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": format!("Product with ID {} deleted successfully", product["id"])})
    );

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unavailable_repository_yields_500() {
    let app = handlers::router(ProductService::new(UnavailableProductRepository));

    let (status, body) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}
