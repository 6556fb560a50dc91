use std::time::Duration;

use async_trait::async_trait;
use dashkit::table::{SortDirection, TableAction, TableState};
use dashkit_remote::error::ApiError;
use dashkit_remote::mock::{MockServer, ProductCatalog};
use dashkit_remote::{AjaxConfig, HttpMethod, RemoteTable, RowSource, TableDataClient};
use serde_json::json;

async fn server() -> MockServer {
    MockServer::start(ProductCatalog::default()).await.unwrap()
}

#[tokio::test]
async fn test_fetch_first_page() {
    let server = server().await;
    let client = TableDataClient::new().unwrap();

    let page = client.fetch(&AjaxConfig::new(server.url())).await.unwrap();
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.total, 100);
    assert_eq!(page.rows[0].get("name").as_str(), Some("Product 1"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_fetch_sends_query_params() {
    let server = server().await;
    let client = TableDataClient::new().unwrap();
    let config = AjaxConfig::new(server.url())
        .param("search", "product 1")
        .param("perPage", 5)
        .param("page", 3);

    let page = client.fetch(&config).await.unwrap();
    assert_eq!(page.total, 12);
    assert_eq!(page.rows.len(), 2);
}

#[tokio::test]
async fn test_fetch_with_transform() {
    let server = server().await;
    let client = TableDataClient::new().unwrap();
    let config = AjaxConfig::new(server.url())
        .param("perPage", 3)
        .data_path("wrapped.items")
        .total_path("wrapped.count");

    let page = client
        .fetch_with(&config, |document| {
            json!({"wrapped": {"items": document["data"].clone(), "count": 999}})
        })
        .await
        .unwrap();
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.total, 999);
}

#[tokio::test]
async fn test_http_error_status() {
    let server = server().await;
    let client = TableDataClient::new().unwrap();
    let url = format!("http://{}/api/missing", server.addr());

    let err = client.fetch(&AjaxConfig::new(url)).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_post_is_rejected_by_mock() {
    let server = server().await;
    let client = TableDataClient::new().unwrap();
    let config = AjaxConfig::new(server.url())
        .method(HttpMethod::Post)
        .param("page", 1);

    let err = client.fetch(&config).await.unwrap_err();
    assert_eq!(err.status_code(), Some(405));
}

#[tokio::test]
async fn test_non_json_success_keeps_body() {
    let server = server().await;
    let client = TableDataClient::new().unwrap();

    let err = client
        .fetch(&AjaxConfig::new(server.health_url()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Parse { body: Some(_), .. }));
    assert_eq!(err.body(), Some("ok"));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_invalid_url() {
    let client = TableDataClient::new().unwrap();
    let err = client.fetch(&AjaxConfig::new("not a url")).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TableDataClient::new().unwrap();
    let err = client
        .fetch(&AjaxConfig::new(format!("http://{}/api/products", addr)))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_remote_table_uses_table_state() {
    let server = server().await;
    let table = RemoteTable::new(TableDataClient::new().unwrap(), AjaxConfig::new(server.url()));
    let state = TableState::default()
        .reduce(&TableAction::SetPerPage(25))
        .reduce(&TableAction::SetSort {
            column: Some("stock".into()),
            direction: Some(SortDirection::Desc),
        });

    let page = table.load(&state).await.unwrap().unwrap();
    assert_eq!(page.rows.len(), 25);
    let stock: Vec<f64> = page
        .rows
        .iter()
        .map(|r| r.get("stock").as_f64().unwrap())
        .collect();
    assert!(stock.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_remote_table_with_transform() {
    let server = server().await;
    let config = AjaxConfig::new(server.url())
        .data_path("wrapped.items")
        .total_path("wrapped.count");
    let table = RemoteTable::new(TableDataClient::new().unwrap(), config).with_transform(|document| {
        json!({"wrapped": {"items": document["data"].clone(), "count": 777}})
    });
    let state = TableState::default().reduce(&TableAction::SetPerPage(5));

    let page = table.load(&state).await.unwrap().unwrap();
    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.total, 777);
}

/// Answers page 1 slowly and every other page at once.
struct SlowFirstPage;

#[async_trait]
impl RowSource for SlowFirstPage {
    async fn fetch_document(&self, config: &AjaxConfig) -> Result<serde_json::Value, ApiError> {
        let page = config.params["page"].as_u64().unwrap_or(1);
        if page == 1 {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        Ok(json!({"data": [], "total": page}))
    }
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let table = RemoteTable::new(SlowFirstPage, AjaxConfig::new("http://unused.invalid"));
    let first = TableState::default();
    let second = first.reduce(&TableAction::SetPage(2));

    let (older, newer) = tokio::join!(table.load(&first), table.load(&second));
    assert_eq!(older.unwrap(), None);
    assert_eq!(newer.unwrap().map(|p| p.total), Some(2));
}

#[tokio::test]
async fn test_mock_server_delay() {
    let server = MockServer::start_with_delay(ProductCatalog::default(), Duration::from_millis(20))
        .await
        .unwrap();
    let client = TableDataClient::new().unwrap();
    let started = std::time::Instant::now();
    client.fetch(&AjaxConfig::new(server.url())).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(20));
}
