//! Product repository trait and its HTTP and canned implementations.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use easel_catalog::Product;
use tracing::debug;

use crate::error::FetchError;
use crate::timeout::TimeoutConfig;

/// Base URL of the hosted catalog service.
pub const DEFAULT_BASE_URL: &str = "https://66f7c380b5d85f31a3438d56.mockapi.io/api";

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the `/products` path is resolved against.
    pub base_url: String,
    /// Timeouts applied to every request.
    pub timeout: TimeoutConfig,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: TimeoutConfig::default(),
        }
    }

    /// Override the timeout configuration.
    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Source of the full product list.
///
/// The catalog service is a flat REST endpoint: one GET returns every
/// product. Implementations never retry on failure; retry-on-refocus is
/// the calling screen's decision.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch the full product list.
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError>;
}

#[async_trait]
impl<T: ProductRepository + ?Sized> ProductRepository for &T {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        (**self).fetch_all().await
    }
}

#[async_trait]
impl<T: ProductRepository + ?Sized> ProductRepository for std::sync::Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        (**self).fetch_all().await
    }
}

/// HTTP-backed product repository.
pub struct HttpRepository {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpRepository {
    /// Build a repository from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout.connect)
            .timeout(config.timeout.total)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { config, http })
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProductRepository for HttpRepository {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.products_url();
        debug!(%url, "fetching product catalog");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| classify(e, &url))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::Http { status, url });
        }

        let bytes = response.bytes().await.map_err(|e| classify(e, &url))?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;

        debug!(count = products.len(), "product catalog fetched");
        Ok(products)
    }
}

/// Map a transport error onto the fetch error taxonomy.
fn classify(err: reqwest::Error, url: &str) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else if err.is_connect() {
        FetchError::Connection(err.to_string())
    } else {
        FetchError::Request(err.to_string())
    }
}

/// Canned product repository for tests.
///
/// Serves a fixed product list, counts fetches so callers can assert a
/// fetch did or did not happen, and can be switched into an unavailable
/// state to exercise the catalog-unavailable path.
#[derive(Default)]
pub struct StaticRepository {
    products: Vec<Product>,
    unavailable: AtomicBool,
    fetches: AtomicUsize,
}

impl StaticRepository {
    /// Create a repository serving `products`.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            unavailable: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Make subsequent fetches fail until turned off again.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of fetches served or refused so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductRepository for StaticRepository {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(FetchError::Connection("catalog offline".to_string()));
        }
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_url_joins_path() {
        let repo = HttpRepository::new(ClientConfig::new("https://catalog.test/api")).unwrap();
        assert_eq!(repo.products_url(), "https://catalog.test/api/products");

        let repo = HttpRepository::new(ClientConfig::new("https://catalog.test/api/")).unwrap();
        assert_eq!(repo.products_url(), "https://catalog.test/api/products");
    }

    #[tokio::test]
    async fn test_static_repository_serves_products() {
        let repo = StaticRepository::new(vec![Product::new("p1", "Red Brush", 12.5, "Arteza")]);
        let products = repo.fetch_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(repo.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_static_repository_unavailable() {
        let repo = StaticRepository::new(vec![]);
        repo.set_unavailable(true);
        assert!(matches!(
            repo.fetch_all().await,
            Err(FetchError::Connection(_))
        ));

        repo.set_unavailable(false);
        assert!(repo.fetch_all().await.is_ok());
    }
}
