//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock to stand in for the catalog API and run the
//! whole pipeline end-to-end, writing into temporary directories.

use serde_json::json;
use sneaker_scout::config::{ApiConfig, Config, FilterConfig, OutputConfig};
use sneaker_scout::scraper::{fetch_products, run_scrape, CatalogClient, ScrapeOutcome};
use sneaker_scout::ScrapeError;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, csv_path: &PathBuf) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            user_agent: "TestScout/1.0".to_string(),
            timeout_secs: 5,
        },
        filter: FilterConfig {
            keyword: "shoe".to_string(),
        },
        output: OutputConfig {
            csv_path: csv_path.to_string_lossy().into_owned(),
        },
    }
}

async fn mount_categories(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_products(server: &MockServer, slug: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/products/category/{}", slug)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_scrape_writes_filtered_csv() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("output").join("sneakers_dummyjson.csv");

    mount_categories(
        &mock_server,
        json!([
            {"slug": "mens-shoes", "name": "Mens Shoes", "url": "x"},
            {"slug": "womens-bags", "name": "Womens Bags", "url": "y"},
            {"slug": "womens-shoes", "name": "Womens Shoes", "url": "z"}
        ]),
    )
    .await;

    mount_products(
        &mock_server,
        "mens-shoes",
        json!({
            "products": [
                {
                    "id": 1,
                    "title": "Runner X",
                    "price": 89.99,
                    "category": "mens-shoes",
                    "brand": "Nike",
                    "rating": 4.5,
                    "description": "Great\nshoe\nfor running"
                },
                {
                    "id": 2,
                    "title": "Laces",
                    "price": 5,
                    "category": "accessories",
                    "rating": 3,
                    "description": "Spare laces"
                }
            ],
            "total": 2
        }),
    )
    .await;

    mount_products(
        &mock_server,
        "womens-shoes",
        json!({
            "products": [
                {
                    "title": "Heel",
                    "price": 120,
                    "category": "womens-shoes",
                    "rating": 4.1,
                    "description": "  Tall heel  "
                }
            ]
        }),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), &csv_path);
    let outcome = run_scrape(config).await.expect("Scrape failed");

    match &outcome {
        ScrapeOutcome::Saved { path, stats } => {
            assert_eq!(path, &csv_path);
            assert_eq!(stats.categories_listed, 3);
            assert_eq!(stats.categories_matched, 2);
            assert_eq!(stats.products_fetched, 3);
            assert_eq!(stats.products_retained, 2);
        }
        other => panic!("Unexpected outcome: {:?}", other),
    }
    assert_eq!(outcome.saved_count(), 2);
    assert_eq!(
        outcome.summary("shoe"),
        format!("Saved 2 products to {}", csv_path.display())
    );

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Title,Price,Category,Brand,Rating,Description",
            "Runner X,89.99,mens-shoes,Nike,4.5,Great shoe for running",
            "Heel,120,womens-shoes,,4.1,Tall heel",
        ]
    );
}

#[tokio::test]
async fn test_no_matching_categories_writes_nothing() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("output").join("sneakers.csv");

    mount_categories(
        &mock_server,
        json!([{"slug": "laptops", "name": "Laptops"}, {"slug": "womens-bags", "name": "Womens Bags"}]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), &csv_path);
    let outcome = run_scrape(config).await.expect("Scrape failed");

    assert_eq!(outcome, ScrapeOutcome::NoCategories);
    assert_eq!(outcome.summary("shoe"), "No shoe-related categories found.");
    assert!(!csv_path.exists());
    assert!(!csv_path.parent().unwrap().exists());
}

#[tokio::test]
async fn test_legacy_categories_and_loosely_typed_fields() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    mount_categories(&mock_server, json!(["smartphones", "mens-shoes"])).await;
    mount_products(
        &mock_server,
        "mens-shoes",
        json!({"products": [
            {"title": "Trail Shoe", "price": 60},
            {"title": "Court Shoe", "price": "45.50", "brand": 7, "rating": null}
        ], "total": "2"}),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), &csv_path);
    let outcome = run_scrape(config).await.expect("Scrape failed");

    assert_eq!(outcome.saved_count(), 2);
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert!(content.contains("Trail Shoe,60,,,,"));
    assert!(content.contains("Court Shoe,45.50,,7,,"));
}

#[tokio::test]
async fn test_missing_products_field_yields_empty_export() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    mount_categories(&mock_server, json!([{"slug": "mens-shoes", "name": "Mens Shoes"}])).await;
    mount_products(&mock_server, "mens-shoes", json!({"total": 0})).await;

    let config = create_test_config(&mock_server.uri(), &csv_path);
    let outcome = run_scrape(config).await.expect("Scrape failed");

    assert_eq!(outcome.saved_count(), 0);
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(content, "Title,Price,Category,Brand,Rating,Description\r\n");
}

#[tokio::test]
async fn test_category_listing_error_is_fatal() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &csv_path);
    let result = run_scrape(config).await;

    assert!(matches!(
        result,
        Err(ScrapeError::Status { status: 500, .. })
    ));
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn test_product_fetch_error_aborts_without_output() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    mount_categories(
        &mock_server,
        json!([{"slug": "mens-shoes"}, {"slug": "womens-shoes"}]),
    )
    .await;
    mount_products(
        &mock_server,
        "mens-shoes",
        json!({"products": [{"title": "Runner X"}]}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/products/category/womens-shoes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &csv_path);
    let result = run_scrape(config).await;

    assert!(matches!(
        result,
        Err(ScrapeError::Status { status: 404, .. })
    ));
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &csv_path);
    let result = run_scrape(config).await;

    assert!(matches!(result, Err(ScrapeError::Decode { .. })));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server.uri(), &csv_path);
    config.api.timeout_secs = 1;
    let result = run_scrape(config).await;

    assert!(matches!(result, Err(ScrapeError::Timeout { .. })));
}

#[tokio::test]
async fn test_requests_carry_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .and(header("user-agent", "TestScout/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"slug": "tops"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &dir.path().join("out.csv"));
    let client = CatalogClient::new(&config.api).unwrap();

    let categories = client.list_categories().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].slug, "tops");
}

#[tokio::test]
async fn test_fetch_products_keeps_category_order() {
    let mock_server = MockServer::start().await;

    mount_products(
        &mock_server,
        "womens-shoes",
        json!({"products": [{"title": "W1"}, {"title": "W2"}]}),
    )
    .await;
    mount_products(
        &mock_server,
        "mens-shoes",
        json!({"products": [{"title": "M1"}]}),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &dir.path().join("out.csv"));
    let client = CatalogClient::new(&config.api).unwrap();

    let slugs = vec!["womens-shoes".to_string(), "mens-shoes".to_string()];
    let products = fetch_products(&client, &slugs).await.unwrap();
    let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();

    assert_eq!(titles, vec!["W1", "W2", "M1"]);
}
