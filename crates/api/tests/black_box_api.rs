use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::StatusCode;
use serde_json::Value;

use stockpulse_ai::InsightAggregator;
use stockpulse_api::app::{AppServices, build_app};
use stockpulse_core::{ProductId, SaleId};
use stockpulse_infra::{CatalogReader, CatalogSeed, InMemoryCatalog, StoreError};
use stockpulse_products::Product;
use stockpulse_sales::Sale;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(services: AppServices) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(services, Duration::from_secs(5));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct OfflineCatalog;

#[async_trait]
impl CatalogReader for OfflineCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_sales(&self) -> Result<Vec<Sale>, StoreError> {
        Ok(Vec::new())
    }
}

fn seeded_services() -> AppServices {
    let product = |id: &str, name: &str, stock: u64| {
        Product::new(ProductId::new(id).unwrap(), name, stock).unwrap()
    };
    let sale = |n: u32, product_id: &str, quantity: u64| {
        Sale::new(
            SaleId::new(format!("s-{n}")).unwrap(),
            ProductId::new(product_id).unwrap(),
            quantity,
            Utc.with_ymd_and_hms(2024, 7, n, 9, 0, 0).unwrap(),
            quantity as f64 * 3.0,
        )
        .unwrap()
    };

    let catalog = InMemoryCatalog::from_seed(CatalogSeed {
        products: vec![
            product("p-1", "Widgets", 25),
            product("p-2", "Gears", 1_000),
        ],
        sales: vec![
            sale(1, "p-1", 5),
            sale(2, "p-1", 5),
            sale(3, "p-2", 10),
            sale(4, "p-2", 10),
            sale(5, "p-2", 10),
            sale(6, "p-2", 10),
        ],
    });

    AppServices::new(Arc::new(catalog), InsightAggregator::default())
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::spawn(seeded_services()).await;
    assert_eq!(server.get("/health").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn insights_endpoint_returns_report() {
    let server = TestServer::spawn(seeded_services()).await;

    let res = server.get("/api/insights").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();

    let insights = body["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 2);

    // Catalog order is by name: Gears, then Widgets.
    assert_eq!(insights[0]["product_name"], "Gears");
    assert_eq!(insights[0]["recommendation_type"], "info");
    assert_eq!(insights[0]["days_of_stock"], 100);

    assert_eq!(insights[1]["product_id"], "p-1");
    assert_eq!(insights[1]["predicted_demand"], 5);
    assert_eq!(insights[1]["days_of_stock"], 5);
    assert_eq!(insights[1]["recommendation_type"], "urgent");
    assert_eq!(insights[1]["status"], "Low Stock");
    assert_eq!(
        insights[1]["recommendation"],
        "Increase production of Widgets. Current stock will last only 5 days."
    );

    let summary = &body["summary"];
    assert_eq!(summary["total_products"], 2);
    assert_eq!(summary["low_stock_count"], 1);
    assert_eq!(summary["urgent_actions"], 1);
    // (0.55 + 0.59) / 2
    assert_eq!(summary["avg_confidence"], "0.57");

    assert!(body["generated_at"].is_string());
}

#[tokio::test]
async fn stocks_endpoint_returns_flat_view() {
    let server = TestServer::spawn(seeded_services()).await;

    let res = server.get("/api/stocks").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1]["id"], "p-1");
    assert_eq!(products[1]["name"], "Widgets");
    assert_eq!(products[1]["stock"], 25);
    assert_eq!(products[1]["status"], "Low Stock");
    assert_eq!(products[0]["status"], "High Stock");
    assert_eq!(products[0]["confidence"], 0.59);
    assert!(body["generated_at"].is_string());
}

#[tokio::test]
async fn store_failure_maps_to_500() {
    let services = AppServices::new(Arc::new(OfflineCatalog), InsightAggregator::default());
    let server = TestServer::spawn(services).await;

    let res = server.get("/api/insights").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "store_error");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("failed to generate insights:")
    );

    let res = server.get("/api/stocks").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
