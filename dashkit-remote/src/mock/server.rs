//! HTTP server for the product catalog

use std::convert::Infallible;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use http_body_util::Full;
use hyper::Method;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::header::CONTENT_TYPE;
use hyper::header::HeaderValue;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::ProductCatalog;
use super::ProductQuery;

const PRODUCTS_PATH: &str = "/api/products";
const HEALTH_PATH: &str = "/health";

/// Serves `GET /api/products` on a random local port.
///
/// `GET /health` answers `200 OK` with a plain-text `ok` body.
///
/// The server stops on [`MockServer::shutdown`] or when dropped.
///
/// # Example
///
/// ```ignore
/// let server = MockServer::start(ProductCatalog::default()).await?;
/// let page = client.fetch(&AjaxConfig::new(server.url())).await?;
/// server.shutdown().await;
/// ```
#[derive(Debug)]
pub struct MockServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl MockServer {
    /// Starts serving `catalog` with no artificial latency.
    pub async fn start(catalog: ProductCatalog) -> io::Result<Self> {
        Self::start_with_delay(catalog, Duration::ZERO).await
    }

    /// Starts serving `catalog`, waiting `delay` before each response.
    pub async fn start_with_delay(catalog: ProductCatalog, delay: Duration) -> io::Result<Self> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(accept_loop(
            listener,
            Arc::new(catalog),
            delay,
            shutdown.clone(),
        ));

        log::info!("Mock product API listening on {}", addr);
        Ok(Self {
            addr,
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Full URL of the product endpoint.
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, PRODUCTS_PATH)
    }

    /// Full URL of the plain-text health endpoint.
    pub fn health_url(&self) -> String {
        format!("http://{}{}", self.addr, HEALTH_PATH)
    }

    /// Stops accepting connections and waits for the accept loop to end.
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn accept_loop(
    listener: TcpListener,
    catalog: Arc<ProductCatalog>,
    delay: Duration,
    shutdown: CancellationToken,
) {
    loop {
        let stream = tokio::select! {
            _ = shutdown.cancelled() => break,
            accepted = listener.accept() => match accepted {
                Ok((stream, _)) => stream,
                Err(e) => {
                    log::warn!("Mock server accept failed: {}", e);
                    continue;
                }
            },
        };

        let catalog = catalog.clone();
        tokio::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let catalog = catalog.clone();
                let method = req.method().clone();
                let path = req.uri().path().to_string();
                let query = req.uri().query().unwrap_or("").to_string();
                async move {
                    Ok::<_, Infallible>(respond(&catalog, &method, &path, &query, delay).await)
                }
            });

            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                log::debug!("Mock server connection ended: {}", e);
            }
        });
    }
    log::info!("Mock product API stopped");
}

async fn respond(
    catalog: &ProductCatalog,
    method: &Method,
    path: &str,
    query: &str,
    delay: Duration,
) -> Response<Full<Bytes>> {
    if path == HEALTH_PATH && *method == Method::GET {
        let mut response = Response::new(Full::new(Bytes::from_static(b"ok")));
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        return response;
    }
    if path != PRODUCTS_PATH {
        return json_response(StatusCode::NOT_FOUND, r#"{"message":"Not found"}"#.into());
    }
    if *method != Method::GET {
        return json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            r#"{"message":"Method not allowed"}"#.into(),
        );
    }

    let query = ProductQuery::from_query_string(query);
    log::debug!("Mock product query: {:?}", query);

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match serde_json::to_vec(&catalog.query(&query)) {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(e) => {
            log::warn!("Failed to encode product page: {}", e);
            json_response(StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
        }
    }
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
