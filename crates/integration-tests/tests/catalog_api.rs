//! Integration tests for the catalog HTTP contract.
//!
//! Each test starts a catalog server on an ephemeral port and talks to it
//! over real TCP with `reqwest`.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tinyshop_core::Product;
use tinyshop_integration_tests::TestCatalog;

#[tokio::test]
async fn test_get_products_returns_seeded_list() {
    let catalog = TestCatalog::seeded().await;

    let resp = Client::new()
        .get(catalog.url("/products"))
        .send()
        .await
        .expect("Failed to get products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body, json!([{ "id": 1, "name": "Laptop" }]));
}

#[tokio::test]
async fn test_get_products_returns_configured_collection_in_order() {
    let products = vec![
        Product::new(30, "Webcam"),
        Product::new(10, "Laptop"),
        Product::new(20, "Dock"),
    ];
    let catalog = TestCatalog::with_products(products.clone()).await;
    let client = Client::new();

    // Repeated reads see the same, unaltered collection.
    for _ in 0..3 {
        let listed: Vec<Product> = client
            .get(catalog.url("/products"))
            .send()
            .await
            .expect("Failed to get products")
            .json()
            .await
            .expect("Failed to parse body");
        assert_eq!(listed, products);
    }
}

#[tokio::test]
#[allow(clippy::needless_collect)]
async fn test_concurrent_reads() {
    let catalog = TestCatalog::seeded().await;
    let client = Client::new();

    let requests = (0..16).map(|_| {
        let client = client.clone();
        let url = catalog.url("/products");
        tokio::spawn(async move {
            client
                .get(url)
                .send()
                .await
                .expect("Failed to get products")
                .json::<Vec<Product>>()
                .await
                .expect("Failed to parse body")
        })
    });

    for handle in requests.collect::<Vec<_>>() {
        let listed = handle.await.expect("request task panicked");
        assert_eq!(listed, vec![Product::new(1, "Laptop")]);
    }
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let catalog = TestCatalog::seeded().await;

    let resp = Client::new()
        .get(catalog.url("/products"))
        .header("x-request-id", "it-42")
        .send()
        .await
        .expect("Failed to get products");

    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("it-42")
    );
}

#[tokio::test]
async fn test_other_methods_and_paths_are_rejected() {
    let catalog = TestCatalog::seeded().await;
    let client = Client::new();

    let resp = client
        .delete(catalog.url("/products"))
        .send()
        .await
        .expect("Failed to send DELETE");
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let resp = client
        .get(catalog.url("/products/1"))
        .send()
        .await
        .expect("Failed to get product detail");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
